//! ctui - interactive text console with named commands.

use ctui::cli::Cli;
use ctui::config::Config;
use ctui::console::{headless, repl, Console};
use ctui::error::{CtuiError, Result};
use ctui::logging;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse_args();

    if cli.is_headless() {
        logging::init_stderr_logging();
    } else {
        logging::init_file_logging();
    }

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!("{}: {}", e.category(), e);
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

/// Runs the application. Returns false when headless assertions failed.
fn run(cli: &Cli) -> Result<bool> {
    cli.validate_headless().map_err(CtuiError::config)?;

    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;

    let mut console = Console::new(&config.console);

    if cli.is_headless() {
        let headless_config = headless::HeadlessConfig::from_cli(cli)?;
        let steps = headless::load_steps(cli)?;
        let report = headless::run_steps(&mut console, &steps, headless_config.fail_fast)?;
        headless::write_report(&report, &headless_config)?;
        return Ok(report.success());
    }

    info!(commands = ?console.registry().list_commands(), "Starting console");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl::run(&mut console, &config.console.prompt, stdin.lock(), stdout.lock())?;
    Ok(true)
}
