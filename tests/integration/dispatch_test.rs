//! Dispatch tests with application-defined commands.

use ctui::commands::{
    CommandContext, CommandHandler, CommandRegistry, CommandResult, ConsoleEvent, FnHandler,
};
use ctui::error::{CtuiError, Result};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct RecordingEvent {
    history: Vec<String>,
    exits: usize,
}

impl ConsoleEvent for RecordingEvent {
    fn history(&self) -> &[String] {
        &self.history
    }

    fn exit(&mut self) {
        self.exits += 1;
    }
}

/// Writes hex bytes to an imaginary serial port.
struct SendCommand;

impl CommandHandler for SendCommand {
    fn name(&self) -> &str {
        "Send"
    }

    fn description(&self) -> Option<&str> {
        Some("Send hex bytes to the device.")
    }

    fn invoke(&self, ctx: CommandContext<'_>) -> Result<CommandResult> {
        if ctx.args.is_empty() {
            return Ok(CommandResult::Rejected);
        }
        let bytes: std::result::Result<Vec<u8>, _> = ctx
            .args
            .split_whitespace()
            .map(|b| u8::from_str_radix(b, 16))
            .collect();
        let bytes = bytes.map_err(|e| CtuiError::command(format!("bad byte: {e}")))?;
        Ok(CommandResult::append(
            ctx.output,
            &format!("sent {} bytes\n", bytes.len()),
        ))
    }
}

fn registry() -> CommandRegistry {
    let mut registry = CommandRegistry::with_builtins();
    registry.register(SendCommand).unwrap();
    registry
        .register(FnHandler::new("noop", |_ctx: CommandContext<'_>| {
            Ok(CommandResult::NoChange)
        }))
        .unwrap();
    registry
}

#[test]
fn test_every_listed_command_dispatches() {
    let registry = registry();
    let mut event = RecordingEvent::default();

    for name in registry.list_commands() {
        let result = registry.execute(&name, "", &mut event).unwrap();
        if name != "send" {
            assert_ne!(result, CommandResult::Rejected, "{name} was rejected");
        }
    }
    assert_eq!(event.exits, 1);
}

#[test]
fn test_list_and_describe_agree() {
    let registry = registry();
    let descriptions = registry.describe_commands();

    assert_eq!(
        registry.list_commands(),
        vec!["clear", "exit", "help", "history", "noop", "send"]
    );
    assert_eq!(
        descriptions.keys().cloned().collect::<Vec<_>>(),
        registry.list_commands()
    );
    assert_eq!(
        descriptions["send"].as_deref(),
        Some("Send hex bytes to the device.")
    );
    assert_eq!(descriptions["noop"], None);
}

#[test]
fn test_custom_command_receives_remainder() {
    let registry = registry();
    let mut event = RecordingEvent::default();

    let result = registry
        .execute("  SEND 01 ff   0a ", "log\n", &mut event)
        .unwrap();
    assert_eq!(result, CommandResult::output("log\nsent 3 bytes\n"));
}

#[test]
fn test_handler_may_reject_its_own_input() {
    let registry = registry();
    let mut event = RecordingEvent::default();

    assert_eq!(
        registry.execute("send", "log\n", &mut event).unwrap(),
        CommandResult::Rejected
    );
}

#[test]
fn test_handler_error_is_not_translated() {
    let registry = registry();
    let mut event = RecordingEvent::default();

    let err = registry.execute("send zz", "", &mut event).unwrap_err();
    assert_eq!(err.category(), "Command Error");
    assert!(err.to_string().contains("bad byte"));
}

#[test]
fn test_no_change_result_passes_through() {
    let registry = registry();
    let mut event = RecordingEvent::default();

    assert_eq!(
        registry.execute("NoOp whatever", "kept", &mut event).unwrap(),
        CommandResult::NoChange
    );
}

#[test]
fn test_help_lists_custom_commands() {
    let registry = registry();
    let mut event = RecordingEvent::default();

    let CommandResult::NewOutput(help) = registry.execute("help", "", &mut event).unwrap() else {
        panic!("Expected NewOutput");
    };
    assert!(help.contains("send     Send hex bytes to the device.\n"));
    assert!(help.contains("\nnoop\n"));
}

#[test]
fn test_invalid_names_never_reach_the_listing() {
    let mut registry = registry();
    let before = registry.list_commands();

    for name in ["", " \t", "show status"] {
        let err = registry
            .register(FnHandler::new(name, |_ctx: CommandContext<'_>| {
                Ok(CommandResult::output("unreachable"))
            }))
            .err().expect("registration should fail");
        assert_eq!(err.category(), "Configuration Error");
    }
    assert_eq!(registry.list_commands(), before);

    let mut event = RecordingEvent::default();
    for name in registry.list_commands() {
        assert!(registry.contains(&name));
        let result = registry.execute(&name, "", &mut event).unwrap();
        if name != "send" {
            assert_ne!(result, CommandResult::Rejected, "{name} was rejected");
        }
    }
}
