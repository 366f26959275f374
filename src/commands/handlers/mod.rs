//! Command handlers for ctui.
//!
//! Every command is an implementation of [`CommandHandler`]. Handlers receive
//! a [`CommandContext`] and return a [`CommandResult`].

pub mod history;
pub mod system;

use super::output::CommandResult;
use super::router::CommandRegistry;
use crate::error::Result;

/// Host capabilities passed through to every handler.
///
/// The registry never inspects this object; only handlers use it.
pub trait ConsoleEvent {
    /// Previously accepted input lines, oldest first.
    fn history(&self) -> &[String];

    /// Asks the host application to stop after the current command.
    fn exit(&mut self);
}

/// Context provided to command handlers.
pub struct CommandContext<'a> {
    /// Argument text after the command name, internal whitespace preserved.
    pub args: &'a str,
    /// Current output buffer.
    pub output: &'a str,
    /// Host capabilities.
    pub event: &'a mut dyn ConsoleEvent,
    /// The registry that dispatched this call.
    pub registry: &'a CommandRegistry,
}

/// A named command implementation.
pub trait CommandHandler {
    /// Name typed by the user. Matched case-insensitively.
    fn name(&self) -> &str;

    /// One-line help text.
    fn description(&self) -> Option<&str> {
        None
    }

    /// Runs the command.
    fn invoke(&self, ctx: CommandContext<'_>) -> Result<CommandResult>;
}

/// Adapts a closure into a [`CommandHandler`].
pub struct FnHandler<F> {
    name: String,
    description: Option<String>,
    func: F,
}

impl<F> FnHandler<F>
where
    F: Fn(CommandContext<'_>) -> Result<CommandResult>,
{
    /// Creates a handler with no description.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            description: None,
            func,
        }
    }

    /// Sets the help text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl<F> CommandHandler for FnHandler<F>
where
    F: Fn(CommandContext<'_>) -> Result<CommandResult>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn invoke(&self, ctx: CommandContext<'_>) -> Result<CommandResult> {
        (self.func)(ctx)
    }
}
