//! Host side of the command dispatcher.
//!
//! Owns the output buffer and input history, implements the host capabilities
//! handlers rely on, and drives the registry interactively or from a script.

pub mod headless;
pub mod history;
pub mod repl;
pub mod session;

pub use history::InputHistory;
pub use session::{Console, Session, Submission};
