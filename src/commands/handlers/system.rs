//! System command handlers (clear, help, exit).

use super::{CommandContext, CommandHandler};
use crate::commands::help::generate_help_text;
use crate::commands::output::CommandResult;
use crate::error::Result;

/// Message appended to the output when the application closes.
pub const CLOSING_MESSAGE: &str = "Closing application.\n";

/// Handles `clear`.
#[derive(Debug, Default)]
pub struct ClearCommand;

impl CommandHandler for ClearCommand {
    fn name(&self) -> &str {
        "clear"
    }

    fn description(&self) -> Option<&str> {
        Some("Clear the screen.")
    }

    fn invoke(&self, _ctx: CommandContext<'_>) -> Result<CommandResult> {
        Ok(CommandResult::Clear)
    }
}

/// Handles `help`.
#[derive(Debug, Default)]
pub struct HelpCommand {
    intro: Option<String>,
}

impl HelpCommand {
    /// Creates a help command with a custom intro paragraph.
    pub fn with_intro(intro: Option<String>) -> Self {
        Self { intro }
    }
}

impl CommandHandler for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn description(&self) -> Option<&str> {
        Some("Print application help.")
    }

    fn invoke(&self, ctx: CommandContext<'_>) -> Result<CommandResult> {
        let help = generate_help_text(self.intro.as_deref(), &ctx.registry.describe_commands());
        Ok(CommandResult::append(ctx.output, &help))
    }
}

/// Handles `exit`.
#[derive(Debug, Default)]
pub struct ExitCommand;

impl CommandHandler for ExitCommand {
    fn name(&self) -> &str {
        "exit"
    }

    fn description(&self) -> Option<&str> {
        Some("Exit the application.")
    }

    fn invoke(&self, ctx: CommandContext<'_>) -> Result<CommandResult> {
        ctx.event.exit();
        Ok(CommandResult::append(ctx.output, CLOSING_MESSAGE))
    }
}
