//! Headless mode for scripted testing and automation.
//!
//! Runs a list of steps against a [`Console`] without a terminal and reports
//! the final output buffer and assertion results.

mod events;
mod output;

pub use events::{Assertion, Step, StepParser};
pub use output::{AssertionFailure, HeadlessReport};

use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use tracing::{info, warn};

use super::session::{Console, Submission};
use crate::cli::{Cli, OutputFormat};
use crate::error::{CtuiError, Result};

/// Configuration for headless mode execution.
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    /// Report format.
    pub output_format: OutputFormat,
    /// Whether to stop on first assertion failure.
    pub fail_fast: bool,
    /// Path to write the report (None = stdout).
    pub output_file: Option<PathBuf>,
}

impl HeadlessConfig {
    /// Creates a HeadlessConfig from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self {
            output_format: cli.parse_output_format().map_err(CtuiError::config)?,
            fail_fast: cli.fail_fast,
            output_file: cli.output_file.clone(),
        })
    }
}

/// Loads steps from `--events` or `--script` (`-` reads stdin).
pub fn load_steps(cli: &Cli) -> Result<Vec<Step>> {
    if let Some(events) = &cli.events {
        return StepParser::parse_events(events);
    }

    let Some(script) = &cli.script else {
        return Err(CtuiError::config("--headless requires --events or --script"));
    };

    let content = if script == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(script)
            .map_err(|e| CtuiError::script(format!("Failed to read script '{script}': {e}")))?
    };

    StepParser::parse_script(&content)
}

/// Runs the steps in order.
///
/// Input steps after `exit` are skipped. Handler errors abort the run.
pub fn run_steps(console: &mut Console, steps: &[Step], fail_fast: bool) -> Result<HeadlessReport> {
    let start = Instant::now();
    let mut last: Option<Submission> = None;
    let mut lines_submitted = 0;
    let mut lines_rejected = 0;
    let mut assertions_passed = 0;
    let mut failures = Vec::new();

    for (index, step) in steps.iter().enumerate() {
        match step {
            Step::Input(line) => {
                if !console.is_running() {
                    warn!(step = index, line = %line, "Session closed, skipping input");
                    continue;
                }
                let submission = console.submit(line)?;
                lines_submitted += 1;
                if !submission.accepted {
                    lines_rejected += 1;
                }
                last = Some(submission);
            }
            Step::Assert(assertion) => {
                if assertion.check(console, last.as_ref()) {
                    assertions_passed += 1;
                } else {
                    warn!(step = index, assertion = %assertion, "Assertion failed");
                    failures.push(AssertionFailure {
                        step: index,
                        assertion: assertion.to_string(),
                    });
                    if fail_fast {
                        break;
                    }
                }
            }
        }
    }

    let report = HeadlessReport {
        output: console.output().to_string(),
        history: console.session().input_history().entries().to_vec(),
        running: console.is_running(),
        lines_submitted,
        lines_rejected,
        assertions_passed,
        assertions_failed: failures.len(),
        failures,
        duration_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
    };

    info!(
        lines = report.lines_submitted,
        passed = report.assertions_passed,
        failed = report.assertions_failed,
        "Headless run finished"
    );

    Ok(report)
}

/// Writes the rendered report to the configured destination.
pub fn write_report(report: &HeadlessReport, config: &HeadlessConfig) -> Result<()> {
    let rendered = report.render(config.output_format)?;
    match &config.output_file {
        Some(path) => std::fs::write(path, rendered)?,
        None => print!("{rendered}"),
    }
    Ok(())
}
