//! Command registry and dispatch for ctui.
//!
//! Input lines are resolved to named handlers by their first word. Handlers
//! report back through [`CommandResult`], which keeps "output replaced",
//! "output cleared", "nothing changed" and "input rejected" apart.

pub mod handlers;
pub mod help;
pub mod output;
pub mod router;

pub use handlers::{CommandContext, CommandHandler, ConsoleEvent, FnHandler};
pub use output::CommandResult;
pub use router::{split_input, CommandRegistry};
