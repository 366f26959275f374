//! Console tests: config loading, output buffer updates and the line loop.

use std::io::{Cursor, Write};

use ctui::commands::{CommandContext, CommandRegistry, CommandResult, FnHandler};
use ctui::config::Config;
use ctui::console::{repl, Console};
use pretty_assertions::assert_eq;

fn load_config(toml: &str) -> Config {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{toml}").unwrap();
    Config::load_from_file(file.path()).unwrap()
}

#[test]
fn test_config_customizes_help_and_prompt() {
    let config = load_config(
        r#"
[console]
prompt = "modbus> "
help_intro = "Modbus TCP console."
"#,
    );
    let mut console = Console::new(&config.console);
    let mut out = Vec::new();

    repl::run(
        &mut console,
        &config.console.prompt,
        Cursor::new("help\n"),
        &mut out,
    )
    .unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("modbus> "));
    assert!(console.output().contains("Modbus TCP console."));
}

#[test]
fn test_output_buffer_follows_results() {
    let mut registry = CommandRegistry::with_builtins();
    registry
        .register(FnHandler::new("status", |ctx: CommandContext<'_>| {
            Ok(CommandResult::append(ctx.output, "link up\n"))
        }))
        .unwrap();
    registry
        .register(FnHandler::new("noop", |_ctx: CommandContext<'_>| {
            Ok(CommandResult::NoChange)
        }))
        .unwrap();
    let mut console = Console::with_registry(registry, &Config::default().console);

    console.submit("status").unwrap();
    console.submit("status").unwrap();
    assert_eq!(console.output(), "link up\nlink up\n");

    let submission = console.submit("noop").unwrap();
    assert!(submission.accepted);
    assert!(!submission.output_changed);
    assert_eq!(console.output(), "link up\nlink up\n");

    let submission = console.submit("stats").unwrap();
    assert!(!submission.accepted);
    assert_eq!(console.output(), "link up\nlink up\n");

    console.submit("clear").unwrap();
    assert_eq!(console.output(), "");
}

#[test]
fn test_session_round_trip() {
    let config = Config::default();
    let mut console = Console::new(&config.console);
    let mut out = Vec::new();

    repl::run(
        &mut console,
        "> ",
        Cursor::new("help\nbogus\nhistory\nexit\nclear\n"),
        &mut out,
    )
    .unwrap();

    assert!(!console.is_running());
    assert_eq!(
        console.session().input_history().entries(),
        &["help", "history", "exit"]
    );
    assert!(console.output().ends_with("\n1  help\nClosing application.\n"));
    assert!(String::from_utf8(out)
        .unwrap()
        .contains("Unknown command: bogus."));
}
