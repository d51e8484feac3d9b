//! Layout builders, one per template kind.
//!
//! Every builder is a pure function of the label list it receives. Builders
//! that use labels take at most a fixed number of them and substitute
//! generic defaults when the list is empty; calendar and kanban ignore the
//! labels entirely.

use crate::template::{Element, Style, Template, TemplateKind};

// ---------------------------------------------------------------------------
// Shared constants
// ---------------------------------------------------------------------------

const FONT_FAMILY: &str = "Arial";

const WHITE: &str = "#ffffff";
const SLATE_50: &str = "#f8fafc";
const SLATE_800: &str = "#1e293b";
const GRAY_500: &str = "#6b7280";

const BLUE: &str = "#3b82f6";
const BLUE_DARK: &str = "#1d4ed8";
const GREEN: &str = "#10b981";
const GREEN_DARK: &str = "#059669";
const RED: &str = "#ef4444";
const RED_DARK: &str = "#dc2626";

/// Maximum branches drawn around a mindmap's central topic.
pub const MINDMAP_MAX_BRANCHES: usize = 6;

/// Angular step between consecutive mindmap branches, in degrees.
pub const MINDMAP_BRANCH_STEP_DEG: f64 = 60.0;

/// Distance from the mindmap center to each branch.
pub const MINDMAP_RADIUS: f64 = 150.0;

/// Anchor of the mindmap's central topic.
pub const MINDMAP_CENTER: (f64, f64) = (400.0, 300.0);

pub const TIMELINE_MAX_EVENTS: usize = 5;
pub const NOTES_MAX_SECTIONS: usize = 4;
pub const FLOWCHART_MAX_PROCESSES: usize = 3;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const KANBAN_COLUMNS: [&str; 3] = ["To Do", "In Progress", "Done"];
const KANBAN_CARDS: [&str; 3] = ["Task 1", "Task 2", "Task 3"];

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Build the template for `kind` from the classified element labels.
pub fn build(kind: TemplateKind, labels: &[String]) -> Template {
    match kind {
        TemplateKind::Calendar => calendar(labels),
        TemplateKind::Mindmap => mindmap(labels),
        TemplateKind::Timeline => timeline(labels),
        TemplateKind::Kanban => kanban(labels),
        TemplateKind::Notes => notes(labels),
        TemplateKind::Flowchart => flowchart(labels),
        TemplateKind::Custom => custom(labels),
    }
}

// ---------------------------------------------------------------------------
// Style helpers
// ---------------------------------------------------------------------------

fn text_style(font_size: f64, fill: &str) -> Style {
    Style {
        fill: Some(fill.to_string()),
        font_size: Some(font_size),
        font_family: Some(FONT_FAMILY.to_string()),
        ..Style::default()
    }
}

fn outline_style(fill: &str, stroke: &str, stroke_width: f64) -> Style {
    Style {
        fill: Some(fill.to_string()),
        stroke: Some(stroke.to_string()),
        stroke_width: Some(stroke_width),
        ..Style::default()
    }
}

/// Outlined shape that also carries a text label.
fn labelled_shape_style(fill: &str, stroke: &str, stroke_width: f64, font_size: f64) -> Style {
    Style {
        font_size: Some(font_size),
        font_family: Some(FONT_FAMILY.to_string()),
        ..outline_style(fill, stroke, stroke_width)
    }
}

fn connector_style(stroke_width: f64) -> Style {
    Style {
        stroke: Some(GRAY_500.to_string()),
        stroke_width: Some(stroke_width),
        ..Style::default()
    }
}

/// Up to `max` caller labels, or the numbered defaults when none were given.
fn labels_or_default(labels: &[String], max: usize, prefix: &str, defaults: usize) -> Vec<String> {
    if labels.is_empty() {
        (1..=defaults).map(|n| format!("{prefix} {n}")).collect()
    } else {
        labels.iter().take(max).cloned().collect()
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Annual calendar: a title over a 4x3 grid of month cells.
pub fn calendar(_labels: &[String]) -> Template {
    let mut elements = Vec::with_capacity(MONTHS.len() + 1);

    elements.push(
        Element::text("title", 50.0, 20.0)
            .with_content("Calendar 2024")
            .with_style(text_style(24.0, SLATE_800)),
    );

    for (index, month) in MONTHS.iter().enumerate() {
        let column = (index % 4) as f64;
        let row = (index / 4) as f64;
        elements.push(
            Element::text(format!("month-{index}"), 50.0 + column * 200.0, 50.0 + row * 150.0)
                .with_size(180.0, 120.0)
                .with_content(*month)
                .with_style(Style {
                    background_color: Some(SLATE_50.to_string()),
                    border_color: Some("#e2e8f0".to_string()),
                    border_radius: Some(8.0),
                    ..text_style(16.0, "#2563eb")
                }),
        );
    }

    Template {
        kind: TemplateKind::Calendar,
        title: "Calendar 2024".into(),
        description: "Annual calendar with monthly sections".into(),
        elements,
        background_color: Some(WHITE.into()),
        grid: Some(true),
    }
}

/// Position of mindmap branch `index` on the circle around the center.
pub fn mindmap_branch_position(index: usize) -> (f64, f64) {
    let angle = (index as f64 * MINDMAP_BRANCH_STEP_DEG).to_radians();
    let (cx, cy) = MINDMAP_CENTER;
    (cx + angle.cos() * MINDMAP_RADIUS, cy + angle.sin() * MINDMAP_RADIUS)
}

/// Central topic with radial branches, each followed by its connector.
pub fn mindmap(labels: &[String]) -> Template {
    let branches = labels_or_default(labels, MINDMAP_MAX_BRANCHES, "Branch", 3);
    let (cx, cy) = MINDMAP_CENTER;
    let mut elements = Vec::with_capacity(1 + branches.len() * 2);

    elements.push(
        Element::shape("central", cx, cy)
            .with_size(120.0, 60.0)
            .with_content("Main Topic")
            .with_style(labelled_shape_style(BLUE, BLUE_DARK, 2.0, 16.0)),
    );

    for (index, branch) in branches.into_iter().enumerate() {
        let (x, y) = mindmap_branch_position(index);

        elements.push(
            Element::shape(format!("branch-{index}"), x, y)
                .with_size(100.0, 50.0)
                .with_content(branch)
                .with_style(labelled_shape_style(GREEN, GREEN_DARK, 2.0, 14.0)),
        );
        elements.push(
            Element::line(format!("line-{index}"), cx, cy)
                .ending_at(x, y)
                .with_style(connector_style(2.0)),
        );
    }

    Template {
        kind: TemplateKind::Mindmap,
        title: "Mind Map".into(),
        description: "Central topic with branching ideas".into(),
        elements,
        background_color: Some(SLATE_50.into()),
        grid: Some(false),
    }
}

/// Horizontal spine with a marker and caption per event.
pub fn timeline(labels: &[String]) -> Template {
    let events = labels_or_default(labels, TIMELINE_MAX_EVENTS, "Event", TIMELINE_MAX_EVENTS);
    let mut elements = Vec::with_capacity(1 + events.len() * 2);

    elements.push(
        Element::line("timeline-line", 50.0, 300.0)
            .ending_at(750.0, 300.0)
            .with_size(700.0, 4.0)
            .with_style(connector_style(4.0)),
    );

    for (index, event) in events.into_iter().enumerate() {
        let x = 100.0 + index as f64 * 150.0;

        elements.push(
            Element::shape(format!("marker-{index}"), x, 280.0)
                .with_size(20.0, 20.0)
                .with_style(outline_style(RED, RED_DARK, 2.0)),
        );
        elements.push(
            Element::text(format!("event-{index}"), x - 50.0, 320.0)
                .with_content(event)
                .with_style(text_style(14.0, "#374151")),
        );
    }

    Template {
        kind: TemplateKind::Timeline,
        title: "Project Timeline".into(),
        description: "Sequential timeline with key events".into(),
        elements,
        background_color: Some(WHITE.into()),
        grid: Some(false),
    }
}

/// Three fixed columns, each with a header, a background and sample cards.
pub fn kanban(_labels: &[String]) -> Template {
    let mut elements = Vec::with_capacity(KANBAN_COLUMNS.len() * (2 + KANBAN_CARDS.len()));

    for (col_index, column) in KANBAN_COLUMNS.iter().enumerate() {
        let x = 50.0 + col_index as f64 * 250.0;

        elements.push(
            Element::text(format!("header-{col_index}"), x, 50.0)
                .with_content(*column)
                .with_style(Style {
                    background_color: Some("#f3f4f6".to_string()),
                    border_radius: Some(8.0),
                    ..text_style(18.0, "#1f2937")
                }),
        );
        elements.push(
            Element::shape(format!("col-{col_index}"), x, 80.0)
                .with_size(220.0, 400.0)
                .with_style(Style {
                    border_radius: Some(8.0),
                    ..outline_style("#f9fafb", "#d1d5db", 1.0)
                }),
        );

        for (card_index, card) in KANBAN_CARDS.iter().enumerate() {
            elements.push(
                Element::shape(
                    format!("card-{col_index}-{card_index}"),
                    x + 10.0,
                    100.0 + card_index as f64 * 80.0,
                )
                .with_size(200.0, 60.0)
                .with_content(*card)
                .with_style(Style {
                    border_radius: Some(6.0),
                    ..labelled_shape_style(WHITE, "#e5e7eb", 1.0, 14.0)
                }),
            );
        }
    }

    Template {
        kind: TemplateKind::Kanban,
        title: "Task Board".into(),
        description: "Kanban board with task columns".into(),
        elements,
        background_color: Some(WHITE.into()),
        grid: Some(false),
    }
}

/// Title followed by heading/placeholder pairs, one per section.
pub fn notes(labels: &[String]) -> Template {
    let sections = labels_or_default(labels, NOTES_MAX_SECTIONS, "Section", NOTES_MAX_SECTIONS);
    let mut elements = Vec::with_capacity(1 + sections.len() * 2);

    elements.push(
        Element::text("title", 50.0, 50.0)
            .with_content("Study Notes")
            .with_style(text_style(24.0, SLATE_800)),
    );

    for (index, section) in sections.into_iter().enumerate() {
        let y = 120.0 + index as f64 * 120.0;

        elements.push(
            Element::text(format!("section-{index}"), 50.0, y)
                .with_content(section)
                .with_style(text_style(18.0, BLUE)),
        );
        elements.push(
            Element::text(format!("content-{index}"), 50.0, y + 30.0)
                .with_content("Add your notes here...")
                .with_style(text_style(14.0, GRAY_500)),
        );
    }

    Template {
        kind: TemplateKind::Notes,
        title: "Study Notes".into(),
        description: "Organized note-taking template".into(),
        elements,
        background_color: Some(WHITE.into()),
        grid: Some(false),
    }
}

/// Start node, a vertical chain of process nodes, and an end node.
///
/// Each process after the first is preceded by an arrow from the previous
/// process.
pub fn flowchart(labels: &[String]) -> Template {
    let processes = labels_or_default(
        labels,
        FLOWCHART_MAX_PROCESSES,
        "Process",
        FLOWCHART_MAX_PROCESSES,
    );
    let mut elements = Vec::with_capacity(2 + processes.len() * 2);

    elements.push(
        Element::shape("start", 300.0, 50.0)
            .with_size(100.0, 50.0)
            .with_content("Start")
            .with_style(labelled_shape_style(GREEN, GREEN_DARK, 2.0, 14.0)),
    );

    for (index, process) in processes.into_iter().enumerate() {
        let y = 150.0 + index as f64 * 100.0;

        elements.push(
            Element::shape(format!("process-{index}"), 300.0, y)
                .with_size(120.0, 60.0)
                .with_content(process)
                .with_style(labelled_shape_style(BLUE, BLUE_DARK, 2.0, 14.0)),
        );

        if index > 0 {
            elements.push(
                Element::line(format!("arrow-{index}"), 350.0, y - 100.0)
                    .ending_at(350.0, y)
                    .with_style(connector_style(2.0)),
            );
        }
    }

    elements.push(
        Element::shape("end", 300.0, 450.0)
            .with_size(100.0, 50.0)
            .with_content("End")
            .with_style(labelled_shape_style(RED, RED_DARK, 2.0, 14.0)),
    );

    Template {
        kind: TemplateKind::Flowchart,
        title: "Process Flowchart".into(),
        description: "Step-by-step process visualization".into(),
        elements,
        background_color: Some(SLATE_50.into()),
        grid: Some(false),
    }
}

/// Blank gridded canvas. Also the fallback for anything unrecognised.
pub fn custom(_labels: &[String]) -> Template {
    Template {
        kind: TemplateKind::Custom,
        title: "Custom Whiteboard".into(),
        description: "Blank canvas for your ideas".into(),
        elements: Vec::new(),
        background_color: Some(WHITE.into()),
        grid: Some(true),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
