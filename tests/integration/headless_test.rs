//! Headless mode tests driven through CLI arguments and script files.

use std::io::Write;

use clap::Parser;
use ctui::cli::{Cli, OutputFormat};
use ctui::config::Config;
use ctui::console::headless::{self, HeadlessConfig};
use ctui::console::Console;

fn run_cli(args: &[&str]) -> headless::HeadlessReport {
    let cli = Cli::parse_from(args);
    cli.validate_headless().unwrap();
    let config = HeadlessConfig::from_cli(&cli).unwrap();
    let steps = headless::load_steps(&cli).unwrap();
    let mut console = Console::new(&Config::default().console);
    headless::run_steps(&mut console, &steps, config.fail_fast).unwrap()
}

#[test]
fn test_events_from_cli() {
    let report = run_cli(&[
        "ctui",
        "--headless",
        "--events",
        "HELP,assert:matches:(?m)^exit +Exit the application\\.$,exit,assert:running:false",
    ]);
    assert!(report.success(), "failures: {:?}", report.failures);
    assert_eq!(report.history, vec!["HELP", "exit"]);
}

#[test]
fn test_script_file() {
    let mut script = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        script,
        "# start from a blank screen\n\
         \n\
         clear\n\
         assert:empty\n\
         history 5\n\
         assert:contains:1  clear\n\
         nope\n\
         assert:rejected\n\
         assert:contains:clear"
    )
    .unwrap();
    let path = script.path().to_str().unwrap().to_string();

    let report = run_cli(&["ctui", "--headless", "--script", path.as_str()]);
    assert!(report.success(), "failures: {:?}", report.failures);
    assert_eq!(report.lines_submitted, 3);
    assert_eq!(report.lines_rejected, 1);
}

#[test]
fn test_missing_script_is_an_error() {
    let cli = Cli::parse_from(["ctui", "--headless", "--script", "/nonexistent/steps.txt"]);
    let err = headless::load_steps(&cli).unwrap_err();
    assert_eq!(err.category(), "Script Error");
}

#[test]
fn test_json_report_written_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("report.json");
    let out_arg = out_path.to_str().unwrap().to_string();

    let cli = Cli::parse_from([
        "ctui",
        "--headless",
        "--events",
        "help,assert:empty",
        "--output",
        "json",
        "--output-file",
        out_arg.as_str(),
    ]);
    let config = HeadlessConfig::from_cli(&cli).unwrap();
    assert_eq!(config.output_format, OutputFormat::Json);

    let steps = headless::load_steps(&cli).unwrap();
    let mut console = Console::new(&Config::default().console);
    let report = headless::run_steps(&mut console, &steps, config.fail_fast).unwrap();
    headless::write_report(&report, &config).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(json["assertions_failed"], 1);
    assert_eq!(json["failures"][0]["assertion"], "assert:empty");
    assert_eq!(json["running"], true);
}
