pub mod model;
pub mod render;
pub mod wrap;
pub mod writer;

pub use model::{Document, Report, Section, Summary, Tally, ToolInfo};
pub use render::{Line, LineKind, dump, layout, render_text, write_text};
pub use writer::ReportWriter;
