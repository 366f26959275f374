//! Command registry and routing for ctui.
//!
//! Resolves an input line to a registered handler and invokes it.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::handlers::history::HistoryCommand;
use super::handlers::system::{ClearCommand, ExitCommand, HelpCommand};
use super::handlers::{CommandContext, CommandHandler, ConsoleEvent};
use super::output::CommandResult;
use crate::error::{CtuiError, Result};

/// Splits an input line into a lookup key and its argument text.
///
/// The line is trimmed, then split once on the first run of whitespace. The
/// key is lower-cased; the remainder keeps its internal whitespace verbatim.
pub fn split_input(input: &str) -> (String, &str) {
    let input = input.trim();
    match input.find(char::is_whitespace) {
        Some(idx) => {
            let (command, rest) = input.split_at(idx);
            (command.to_lowercase(), rest.trim_start())
        }
        None => (input.to_lowercase(), ""),
    }
}

/// Set of named commands with name-based dispatch.
#[derive(Default)]
pub struct CommandRegistry {
    handlers: BTreeMap<String, Box<dyn CommandHandler>>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding `clear`, `exit`, `help` and `history`.
    pub fn with_builtins() -> Self {
        Self::with_help_intro(None)
    }

    /// Like [`CommandRegistry::with_builtins`], with a custom `help` intro.
    pub fn with_help_intro(intro: Option<String>) -> Self {
        let mut registry = Self::new();
        registry.insert("clear".to_string(), Box::new(ClearCommand));
        registry.insert("exit".to_string(), Box::new(ExitCommand));
        registry.insert("help".to_string(), Box::new(HelpCommand::with_intro(intro)));
        registry.insert("history".to_string(), Box::new(HistoryCommand));
        registry
    }

    /// Registers a handler under its lower-cased name.
    ///
    /// The name must be a single non-empty word, otherwise `execute` could
    /// never resolve it. A handler already registered under the same name is
    /// replaced and returned.
    pub fn register<H>(&mut self, handler: H) -> Result<Option<Box<dyn CommandHandler>>>
    where
        H: CommandHandler + 'static,
    {
        let name = handler.name().to_lowercase();
        if name.is_empty() || name.contains(char::is_whitespace) {
            warn!(command = %name, "Refusing to register invalid command name");
            return Err(CtuiError::config(format!(
                "Invalid command name '{name}': must be one word with no whitespace"
            )));
        }
        Ok(self.insert(name, Box::new(handler)))
    }

    fn insert(
        &mut self,
        name: String,
        handler: Box<dyn CommandHandler>,
    ) -> Option<Box<dyn CommandHandler>> {
        let previous = self.handlers.insert(name.clone(), handler);
        if previous.is_some() {
            warn!(command = %name, "Replacing previously registered command");
        }
        previous
    }

    /// Returns true if `name` resolves to a command.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(&name.to_lowercase())
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no command is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Names of all registered commands, sorted.
    pub fn list_commands(&self) -> Vec<String> {
        self.handlers.keys().cloned().collect()
    }

    /// Maps every command name to its description.
    pub fn describe_commands(&self) -> BTreeMap<String, Option<String>> {
        self.handlers
            .iter()
            .map(|(name, handler)| (name.clone(), handler.description().map(str::to_string)))
            .collect()
    }

    /// Runs the command named by the first word of `input`.
    ///
    /// Returns [`CommandResult::Rejected`] when no command matches, including
    /// for empty input. Errors raised by the handler are returned unchanged.
    pub fn execute(
        &self,
        input: &str,
        output: &str,
        event: &mut dyn ConsoleEvent,
    ) -> Result<CommandResult> {
        let (command, args) = split_input(input);

        let Some(handler) = self.handlers.get(&command) else {
            debug!(command = %command, "Unknown command");
            return Ok(CommandResult::Rejected);
        };

        debug!(command = %command, args, "Dispatching command");
        handler.invoke(CommandContext {
            args,
            output,
            event,
            registry: self,
        })
    }
}
