use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glint_core::Level;

#[derive(Debug, Parser)]
#[command(
    name = "glint",
    version,
    about = "Render diagnostic issues as a grouped, color-coded terminal report"
)]
pub struct Args {
    /// Path to the JSON issue document
    pub input: PathBuf,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Minimum severity to report (ok, info, warn, error or an ordinal)
    #[arg(long, default_value = "ok")]
    pub level: Level,

    /// Exit with status 1 when an issue reaches this severity
    #[arg(long, default_value = "error")]
    pub fail_on: Level,

    /// JSON file overriding width, tab size, delimiter or palette
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report width in columns
    #[arg(long)]
    pub width: Option<usize>,

    /// Use ASCII markers instead of emoji
    #[arg(long)]
    pub ascii: bool,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
