//! Display formatting for terminal output
//!
//! Turns records and birthday queries into the text lines the REPL prints.

pub mod birthday;
pub mod record;

pub use birthday::{format_birthday, format_upcoming_birthdays};
pub use record::{format_record_line, format_record_list};
