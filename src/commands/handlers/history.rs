//! History command handler.

use std::fmt::Write;

use super::{CommandContext, CommandHandler};
use crate::commands::output::CommandResult;
use crate::error::{CtuiError, Result};

/// Handles `history`.
#[derive(Debug, Default)]
pub struct HistoryCommand;

impl CommandHandler for HistoryCommand {
    fn name(&self) -> &str {
        "history"
    }

    fn description(&self) -> Option<&str> {
        Some("Print current history.")
    }

    fn invoke(&self, ctx: CommandContext<'_>) -> Result<CommandResult> {
        let entries = ctx.event.history();
        if entries.is_empty() {
            return Ok(CommandResult::append(ctx.output, "No history.\n"));
        }

        let width = entries.len().to_string().len();
        let mut text = String::new();
        for (i, entry) in entries.iter().enumerate() {
            writeln!(text, "{:>width$}  {}", i + 1, entry)
                .map_err(|e| CtuiError::internal(e.to_string()))?;
        }

        Ok(CommandResult::append(ctx.output, &text))
    }
}
