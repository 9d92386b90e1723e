use glint_core::issue::{DEFAULT_DELIMITER, RawIssue};
use glint_core::report::model::{Document, Report, ToolInfo};
use glint_core::report::wrap::wrap;
use glint_core::report::{dump, render_text};
use glint_core::style::{Color, Palette, colorize};
use glint_core::{Issue, Level, ReportConfig};

fn tool() -> ToolInfo {
    ToolInfo {
        name: "glint".into(),
        version: "0.1.0-test".into(),
    }
}

/// Renders issues through `dump` and returns the output text.
fn dump_to_string(config: &ReportConfig, min_level: Level, issues: &[Issue]) -> String {
    let mut buf = Vec::new();
    dump(&mut buf, config, min_level, issues).expect("dump into a Vec cannot fail");
    String::from_utf8(buf).expect("output is utf-8")
}

fn pod_issues() -> Vec<Issue> {
    vec![
        Issue::from_raw(Level::ERROR, "NoLimits", DEFAULT_DELIMITER),
        Issue::from_raw(Level::WARN, "Container#app\u{1f}CPU unset", DEFAULT_DELIMITER),
        Issue::from_raw(Level::WARN, "Container#app\u{1f}Memory unset", DEFAULT_DELIMITER),
    ]
}

#[test]
fn grouped_scenario_renders_header_once() {
    let config = ReportConfig::default();
    let out = dump_to_string(&config, Level::INFO, &pod_issues());
    let white = |s: &str| colorize(s, Color::WHITE);

    let expected = format!(
        "    💥 {}\n    🐳 {}\n      😱 {}\n      😱 {}\n",
        white("NoLimits."),
        white("Container#app"),
        white("CPU unset."),
        white("Memory unset."),
    );
    assert_eq!(out, expected);
}

#[test]
fn threshold_above_every_issue_renders_nothing() {
    let config = ReportConfig::default();
    let issues = vec![
        Issue::standalone(Level::WARN, "a"),
        Issue::grouped(Level::WARN, "g", "b"),
    ];
    assert_eq!(dump_to_string(&config, Level::ERROR, &issues), "");
}

#[test]
fn every_standalone_line_ends_with_a_period() {
    let config = ReportConfig::default();
    let issues: Vec<Issue> = (0..5)
        .map(|n| Issue::standalone(Level::INFO, format!("issue {n}")))
        .collect();
    let out = dump_to_string(&config, Level::OK, &issues);

    assert_eq!(out.lines().count(), 5);
    for line in out.lines() {
        assert!(line.ends_with(&format!(".{}", "\x1b[0m")), "{line:?}");
    }
}

#[test]
fn ascii_palette_and_custom_delimiter() {
    let config = ReportConfig {
        delimiter: "::".into(),
        palette: Palette::ascii(),
        ..ReportConfig::default()
    };
    let issues = vec![Issue::from_raw(Level::WARN, "node-1::disk pressure", &config.delimiter)];
    let out = dump_to_string(&config, Level::OK, &issues);

    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[0].starts_with("    [+] "));
    assert!(lines[1].starts_with("      [!] "));
}

#[test]
fn wrap_properties_hold_for_long_text() {
    let message = "x".repeat(1000) + "tail";
    let segments = wrap(&message, 77);
    assert_eq!(segments.concat(), message);
    assert!(segments.iter().all(|s| s.len() <= 77));
    assert_eq!(segments.last().copied(), Some(&message[77 * 13..]));
}

#[test]
fn full_report_frames_each_section() {
    let doc = Document::from_json_str(
        r#"{ "sections": [
            { "title": "Pods", "issues": [
                { "level": "error", "description": "NoLimits" },
                { "level": "warn", "description": "CPU unset", "group": "Container#app" }
            ] },
            { "title": "Nodes", "issues": [
                { "level": "info", "description": "Kernel is old" }
            ] }
        ] }"#,
    )
    .unwrap();
    let config = ReportConfig::default();
    let report = Report::from_document(tool(), doc, &config.delimiter);

    let out = render_text(&report, &config, Level::WARN).unwrap();

    assert!(out.contains(&colorize("Pods", Color::LIGHT_SLATE)));
    assert!(out.contains(&colorize("Nodes", Color::LIGHT_SLATE)));
    assert!(out.contains(&colorize("NoLimits.", Color::WHITE)));
    assert!(!out.contains("Kernel is old"));
    assert!(out.contains("Nothing to report."));
    assert_eq!(out.matches('┅').count(), 160);
}

#[test]
fn output_is_deterministic() {
    let config = ReportConfig::default();
    let a = dump_to_string(&config, Level::OK, &pod_issues());
    let b = dump_to_string(&config, Level::OK, &pod_issues());
    assert_eq!(a, b);
}

#[test]
fn input_level_matching_container_ordinal_renders_as_issue() {
    let raw: RawIssue =
        serde_json::from_str(r#"{ "level": 100, "description": "Strange" }"#).unwrap();
    let config = ReportConfig::default();
    let issues = vec![raw.into_issue(&config.delimiter)];

    let out = dump_to_string(&config, Level::OK, &issues);

    assert_eq!(out.lines().count(), 1);
    assert!(out.starts_with("    ✅ "), "{out:?}");
    assert!(!out.contains("🐳"));
}
