//! ctui - command registry and dispatcher for interactive text consoles.
//!
//! This library exposes the core modules for the binary and integration tests.

pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
