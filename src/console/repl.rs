//! Line-oriented interactive loop.
//!
//! Reads one line per prompt, submits it to the [`Console`] and redraws the
//! output area whenever a command changed it.

use std::io::{BufRead, Write};

use tracing::{error, info};

use super::session::Console;
use crate::error::Result;

/// ANSI sequence that clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Runs the console until `exit` or end of input.
pub fn run<R, W>(console: &mut Console, prompt: &str, input: R, mut out: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();

    while console.is_running() {
        write!(out, "{prompt}")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            info!("End of input");
            break;
        };

        let submission = match console.submit(&line) {
            Ok(submission) => submission,
            Err(e) => {
                error!("{}: {}", e.category(), e);
                writeln!(out, "{e}")?;
                continue;
            }
        };

        if !submission.accepted {
            if !line.trim().is_empty() {
                writeln!(
                    out,
                    "Unknown command: {}. Type help for available commands.",
                    line.trim()
                )?;
            }
            continue;
        }

        if submission.output_changed {
            write!(out, "{CLEAR_SCREEN}{}", console.output())?;
        }
    }

    out.flush()?;
    Ok(())
}
