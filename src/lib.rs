//! Contact book - interactive command-line contact manager
//!
//! Keeps names, phone numbers and birthdays in memory and answers simple
//! commands typed at a prompt, including a lookahead for upcoming birthdays.
//! Nothing is persisted: the address book lives for one session.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Runtime settings
//! - `error`: Custom error types
//! - `models`: Field value types, records and the address book
//! - `display`: Text formatting for the REPL
//! - `cli`: Command table, handlers and the REPL loop
//!
//! # Example
//!
//! ```rust
//! use contact_book::cli::Repl;
//! use contact_book::config::Settings;
//!
//! let mut repl = Repl::new(Settings::default());
//! assert_eq!(repl.handle_line("add John 1234567890"), "Contact added.");
//! assert_eq!(repl.handle_line("phone John"), "John: 1234567890");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;

pub use error::{ContactError, ContactResult};
