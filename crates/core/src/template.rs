//! Template and element value types handed to the canvas editor.
//!
//! JSON field names are camelCase and the discriminants serialize under
//! `type`, which is the shape the editor consumes without translation.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Template kinds
// ---------------------------------------------------------------------------

/// Semantic layout family of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Calendar,
    Mindmap,
    Timeline,
    Kanban,
    Notes,
    Flowchart,
    Custom,
}

impl TemplateKind {
    /// All recognised template kinds.
    pub const ALL: [TemplateKind; 7] = [
        TemplateKind::Calendar,
        TemplateKind::Mindmap,
        TemplateKind::Timeline,
        TemplateKind::Kanban,
        TemplateKind::Notes,
        TemplateKind::Flowchart,
        TemplateKind::Custom,
    ];

    /// Wire name of the kind, as used in JSON and in classifier replies.
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateKind::Calendar => "calendar",
            TemplateKind::Mindmap => "mindmap",
            TemplateKind::Timeline => "timeline",
            TemplateKind::Kanban => "kanban",
            TemplateKind::Notes => "notes",
            TemplateKind::Flowchart => "flowchart",
            TemplateKind::Custom => "custom",
        }
    }

    /// Look up a kind by its exact wire name.
    ///
    /// Matching is case-sensitive; anything else returns `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Elements
// ---------------------------------------------------------------------------

/// Kind of visual primitive an element renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Shape,
    Line,
    Sticky,
    Image,
    Group,
}

/// A canvas coordinate. Origin is top-left, `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Visual attributes of an element. Absent fields fall back to the
/// rendering surface defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
}

/// A single positioned visual primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Unique within the owning template only.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub position: Point,
    /// End point of a `line` element; `position` is its start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Element>>,
}

impl Element {
    fn new(id: impl Into<String>, kind: ElementKind, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            kind,
            position: Point::new(x, y),
            end: None,
            size: None,
            content: None,
            style: None,
            children: None,
        }
    }

    pub fn text(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self::new(id, ElementKind::Text, x, y)
    }

    pub fn shape(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self::new(id, ElementKind::Shape, x, y)
    }

    pub fn line(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self::new(id, ElementKind::Line, x, y)
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Some(Size { width, height });
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn ending_at(mut self, x: f64, y: f64) -> Self {
        self.end = Some(Point::new(x, y));
        self
    }
}

// ---------------------------------------------------------------------------
// Template
// ---------------------------------------------------------------------------

/// The generator's output: an ordered element list plus canvas settings.
///
/// Element order is draw order; later elements render on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(rename = "type")]
    pub kind: TemplateKind,
    pub title: String,
    pub description: String,
    pub elements: Vec<Element>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip() {
        for kind in TemplateKind::ALL {
            assert_eq!(TemplateKind::from_name(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn unknown_kind_names_rejected() {
        assert_eq!(TemplateKind::from_name(""), None);
        assert_eq!(TemplateKind::from_name("Calendar"), None);
        assert_eq!(TemplateKind::from_name("gantt"), None);
    }

    #[test]
    fn element_serializes_with_editor_field_names() {
        let element = Element::shape("card-0-0", 60.0, 100.0)
            .with_size(200.0, 60.0)
            .with_style(Style {
                stroke_width: Some(1.0),
                border_radius: Some(6.0),
                ..Style::default()
            });

        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "shape");
        assert_eq!(json["position"]["x"], 60.0);
        assert_eq!(json["size"]["width"], 200.0);
        assert_eq!(json["style"]["strokeWidth"], 1.0);
        assert_eq!(json["style"]["borderRadius"], 6.0);
        assert!(json["style"].get("fill").is_none());
        assert!(json.get("content").is_none());
        assert!(json.get("children").is_none());
    }

    #[test]
    fn template_serializes_background_color_in_camel_case() {
        let template = Template {
            kind: TemplateKind::Custom,
            title: "Custom Whiteboard".into(),
            description: "Blank canvas for your ideas".into(),
            elements: Vec::new(),
            background_color: Some("#ffffff".into()),
            grid: Some(true),
        };

        let json = serde_json::to_value(&template).unwrap();
        assert_eq!(json["type"], "custom");
        assert_eq!(json["backgroundColor"], "#ffffff");
        assert_eq!(json["grid"], true);
        assert_eq!(json["elements"], serde_json::json!([]));
    }
}
