pub mod color;
pub mod palette;

pub use color::{Color, colorize};
pub use palette::{Palette, Style};
