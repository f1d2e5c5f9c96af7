//! Runtime settings for the contact book
//!
//! Settings come from command-line flags (see the binary's `Cli`), falling
//! back to the defaults below.

use crate::error::{ContactError, ContactResult};

/// Default lookahead for the `birthdays` command, in days
pub const DEFAULT_BIRTHDAY_WINDOW: i64 = 7;

/// Runtime settings for a REPL session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// How many days ahead `birthdays` looks (inclusive)
    pub birthday_window_days: i64,

    /// Banner printed once when the session starts
    pub greeting: String,

    /// Prompt printed before every read
    pub prompt: String,
}

fn default_greeting() -> String {
    "Welcome to the assistant bot!".to_string()
}

fn default_prompt() -> String {
    "Enter a command: ".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW,
            greeting: default_greeting(),
            prompt: default_prompt(),
        }
    }
}

impl Settings {
    /// Default settings with a different birthday window
    pub fn with_birthday_window(days: i64) -> ContactResult<Self> {
        let settings = Self {
            birthday_window_days: days,
            ..Self::default()
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the settings are usable
    pub fn validate(&self) -> ContactResult<()> {
        if self.birthday_window_days < 0 {
            return Err(ContactError::Config(format!(
                "birthday window must not be negative (got {})",
                self.birthday_window_days
            )));
        }
        Ok(())
    }
}
