use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use glint_core::ReportConfig;
use glint_core::report::model::{Document, Report, ToolInfo};
use glint_core::report::{ReportWriter, render};

mod args;

/// Status for failures of the tool itself, as opposed to findings.
const TOOL_FAILURE: u8 = 2;

fn load_config(args: &args::Args) -> Result<ReportConfig> {
    let mut config = match &args.config {
        Some(path) => ReportConfig::from_path(path)
            .with_context(|| format!("failed to load config: {}", path.display()))?,
        None => ReportConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if args.ascii {
        config.palette.use_ascii_glyphs();
    }
    config.validate()?;
    Ok(config)
}

/// Renders the report and returns the findings status (0 or 1).
fn run(args: &args::Args, config: &ReportConfig) -> Result<u8> {
    let tool = ToolInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let document = Document::from_path(&args.input)?;
    let report = Report::from_document(tool, document, &config.delimiter);
    let tally = report.tally(args.level);
    log::debug!("{} issues at or above {}", tally.total, args.level);

    let output = match args.format {
        args::OutputFormat::Json => {
            serde_json::to_string_pretty(&report.summarize(args.level))? + "\n"
        }
        args::OutputFormat::Text => render::render_text(&report, config, args.level)?,
    };

    match &args.out {
        Some(path) => std::fs::write(path, &output)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(if tally.exit_code(args.fail_on) == 0 { 0 } else { 1 })
}

/// Text mode shows tool failures as a report error block; JSON mode keeps
/// stdout clean and reports on stderr.
fn report_failure(args: &args::Args, config: Option<&ReportConfig>, err: &anyhow::Error) {
    if let (args::OutputFormat::Text, Some(config)) = (&args.format, config) {
        let mut stdout = std::io::stdout().lock();
        let rendered = ReportWriter::new(&mut stdout, config)
            .write_error(format_args!("{err:#}"))
            .is_ok();
        if rendered && stdout.flush().is_ok() {
            return;
        }
    }
    eprintln!("Error: {err:?}");
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let args = args::Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            report_failure(&args, None, &err);
            return ExitCode::from(TOOL_FAILURE);
        }
    };

    match run(&args, &config) {
        Ok(status) => ExitCode::from(status),
        Err(err) => {
            report_failure(&args, Some(&config), &err);
            ExitCode::from(TOOL_FAILURE)
        }
    }
}
