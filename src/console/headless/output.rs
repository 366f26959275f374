//! Report rendering for headless mode.

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::{CtuiError, Result};

/// A failed assertion with its position in the script.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AssertionFailure {
    /// Zero-based step index.
    pub step: usize,
    /// The assertion as written.
    pub assertion: String,
}

/// Result of a headless run.
#[derive(Debug, Clone, Serialize)]
pub struct HeadlessReport {
    /// Final output buffer.
    pub output: String,
    /// Accepted input lines, oldest first.
    pub history: Vec<String>,
    /// Whether the session was still running at the end.
    pub running: bool,
    /// Number of lines submitted.
    pub lines_submitted: usize,
    /// Number of submitted lines that were rejected.
    pub lines_rejected: usize,
    /// Number of assertions passed.
    pub assertions_passed: usize,
    /// Number of assertions failed.
    pub assertions_failed: usize,
    /// Details of failed assertions.
    pub failures: Vec<AssertionFailure>,
    /// Total execution time in milliseconds.
    pub duration_ms: u64,
}

impl HeadlessReport {
    /// Returns true if every assertion passed.
    pub fn success(&self) -> bool {
        self.assertions_failed == 0
    }

    /// Renders the report in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| CtuiError::internal(format!("Failed to serialize report: {e}"))),
        }
    }

    fn render_text(&self) -> String {
        let mut text = self.output.clone();
        for failure in &self.failures {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(&format!(
                "FAILED step {}: {}\n",
                failure.step + 1,
                failure.assertion
            ));
        }
        text
    }
}
