mod app;
mod edge;
mod node;

pub use app::{run_viewer, ViewerSettings};
