//! Console state: the output buffer, input history and running flag.

use tracing::{debug, info};

use super::history::InputHistory;
use crate::commands::{CommandRegistry, CommandResult, ConsoleEvent};
use crate::config::ConsoleConfig;
use crate::error::Result;

/// Host capabilities handed to command handlers.
#[derive(Debug)]
pub struct Session {
    history: InputHistory,
    running: bool,
}

impl Session {
    /// Creates a running session with the given history bound.
    pub fn new(history_size: usize) -> Self {
        Self {
            history: InputHistory::with_capacity(history_size),
            running: true,
        }
    }

    /// Returns false once a handler asked the application to exit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Input history of this session.
    pub fn input_history(&self) -> &InputHistory {
        &self.history
    }

    fn record(&mut self, line: &str) {
        self.history.push(line);
    }
}

impl ConsoleEvent for Session {
    fn history(&self) -> &[String] {
        self.history.entries()
    }

    fn exit(&mut self) {
        info!("Exit requested");
        self.running = false;
    }
}

/// Outcome of submitting one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// The result returned by the handler.
    pub result: CommandResult,
    /// False when the line should stay in the input for correction.
    pub accepted: bool,
    /// True when the displayed output differs from before.
    pub output_changed: bool,
}

/// A command registry bound to an output buffer and a session.
pub struct Console {
    registry: CommandRegistry,
    session: Session,
    output: String,
}

impl Console {
    /// Creates a console with the built-in commands.
    pub fn new(config: &ConsoleConfig) -> Self {
        Self::with_registry(
            CommandRegistry::with_help_intro(config.help_intro.clone()),
            config,
        )
    }

    /// Creates a console around an existing registry.
    pub fn with_registry(registry: CommandRegistry, config: &ConsoleConfig) -> Self {
        Self {
            registry,
            session: Session::new(config.history_size),
            output: String::new(),
        }
    }

    /// Runs one input line and applies its result to the output buffer.
    ///
    /// Accepted lines are recorded in history after the handler ran; rejected
    /// lines are never recorded.
    pub fn submit(&mut self, line: &str) -> Result<Submission> {
        let result = self
            .registry
            .execute(line, &self.output, &mut self.session)?;
        debug!(result = result.kind(), "Submitted line");

        let accepted = result.accepts_input();
        if accepted {
            self.session.record(line);
        }

        let output_changed = match &result {
            CommandResult::NewOutput(text) => *text != self.output,
            CommandResult::Clear => !self.output.is_empty(),
            CommandResult::NoChange | CommandResult::Rejected => false,
        };
        self.output = result.apply(std::mem::take(&mut self.output));

        Ok(Submission {
            result,
            accepted,
            output_changed,
        })
    }

    /// Current output buffer.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Returns false once `exit` ran.
    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    /// Session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The registry commands are dispatched through.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }
}
