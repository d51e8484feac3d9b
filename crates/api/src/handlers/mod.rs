pub mod ai;
pub mod whiteboards;
