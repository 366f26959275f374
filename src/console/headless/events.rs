//! Step DSL parser for headless mode.
//!
//! A step is either an input line submitted to the console, or an assertion
//! prefixed with `assert:`.

use crate::console::session::{Console, Submission};
use crate::error::{CtuiError, Result};
use regex::Regex;
use std::fmt;

/// An assertion checked against the console after the previous steps.
#[derive(Debug, Clone)]
pub enum Assertion {
    /// Output contains text (case-insensitive).
    Contains(String),
    /// Output does not contain text (case-insensitive).
    NotContains(String),
    /// Output matches a regex pattern.
    Matches(Regex),
    /// Output buffer is empty.
    Empty,
    /// The last submitted line was rejected.
    Rejected,
    /// The session running flag equals this value.
    Running(bool),
}

impl Assertion {
    /// Checks the assertion.
    pub fn check(&self, console: &Console, last: Option<&Submission>) -> bool {
        let output = console.output();
        match self {
            Self::Contains(text) => output.to_lowercase().contains(&text.to_lowercase()),
            Self::NotContains(text) => !output.to_lowercase().contains(&text.to_lowercase()),
            Self::Matches(re) => re.is_match(output),
            Self::Empty => output.is_empty(),
            Self::Rejected => last.is_some_and(|s| !s.accepted),
            Self::Running(expected) => console.is_running() == *expected,
        }
    }
}

impl fmt::Display for Assertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contains(text) => write!(f, "assert:contains:{text}"),
            Self::NotContains(text) => write!(f, "assert:not_contains:{text}"),
            Self::Matches(re) => write!(f, "assert:matches:{}", re.as_str()),
            Self::Empty => write!(f, "assert:empty"),
            Self::Rejected => write!(f, "assert:rejected"),
            Self::Running(value) => write!(f, "assert:running:{value}"),
        }
    }
}

/// One step of a headless script.
#[derive(Debug, Clone)]
pub enum Step {
    /// Submit a line to the console.
    Input(String),
    /// Check an assertion.
    Assert(Assertion),
}

/// Parses step lists from `--events` and `--script` sources.
pub struct StepParser;

impl StepParser {
    /// Parses a comma-separated list of steps.
    pub fn parse_events(events: &str) -> Result<Vec<Step>> {
        events
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Self::parse_step)
            .collect()
    }

    /// Parses a script with one step per line.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn parse_script(script: &str) -> Result<Vec<Step>> {
        script
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(Self::parse_step)
            .collect()
    }

    /// Parses a single step.
    pub fn parse_step(step: &str) -> Result<Step> {
        let Some(assertion) = step.strip_prefix("assert:") else {
            return Ok(Step::Input(step.to_string()));
        };

        let (kind, arg) = match assertion.split_once(':') {
            Some((kind, arg)) => (kind, Some(arg)),
            None => (assertion, None),
        };

        let parsed = match (kind, arg) {
            ("contains", Some(text)) => Assertion::Contains(text.to_string()),
            ("not_contains", Some(text)) => Assertion::NotContains(text.to_string()),
            ("matches", Some(pattern)) => Assertion::Matches(Regex::new(pattern).map_err(|e| {
                CtuiError::script(format!("Invalid regex in '{step}': {e}"))
            })?),
            ("empty", None) => Assertion::Empty,
            ("rejected", None) => Assertion::Rejected,
            ("running", Some(value)) => Assertion::Running(value.parse().map_err(|_| {
                CtuiError::script(format!(
                    "Invalid value in '{step}'. Expected true or false"
                ))
            })?),
            _ => {
                return Err(CtuiError::script(format!("Unknown assertion '{step}'")));
            }
        };

        Ok(Step::Assert(parsed))
    }
}
