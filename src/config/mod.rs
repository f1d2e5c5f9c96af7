//! Configuration module for the contact book
//!
//! Runtime settings only; nothing is read from or written to disk.

pub mod settings;

pub use settings::Settings;
