pub mod level;
pub mod model;

pub use level::Level;
pub use model::{Description, Issue, RawIssue};

/// Unit separator: the default token folding a group label and a detail
/// into one description string.
pub const DEFAULT_DELIMITER: &str = "\u{1f}";
