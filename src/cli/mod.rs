//! Interactive command layer
//!
//! The command table, the handlers behind each command, and the REPL that
//! reads input lines and dispatches them.

pub mod commands;
pub mod handlers;
pub mod repl;

pub use commands::{commands_help, find_command, Command, CommandAction, COMMANDS};
pub use handlers::execute;
pub use repl::{Repl, ReplState};
