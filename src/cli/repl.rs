//! Line-oriented REPL
//!
//! Reads one line at a time, splits it on whitespace, dispatches the first
//! word to a command and prints the reply. The loop ends on `close`, `exit`
//! or end of input.

use std::io::{BufRead, Write};

use tracing::info;

use super::commands::{find_command, CommandAction};
use super::handlers::{execute, input_error};
use crate::config::Settings;
use crate::error::{ContactError, ContactResult};
use crate::models::AddressBook;

const INVALID_COMMAND: &str = "Invalid command.";

/// Whether the REPL keeps reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplState {
    Running,
    Terminated,
}

/// A REPL session owning the process-wide address book
pub struct Repl {
    book: AddressBook,
    settings: Settings,
    state: ReplState,
}

impl Repl {
    pub fn new(settings: Settings) -> Self {
        Self {
            book: AddressBook::new(),
            settings,
            state: ReplState::Running,
        }
    }

    pub fn state(&self) -> ReplState {
        self.state
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle one input line and return the reply to print
    pub fn handle_line(&mut self, line: &str) -> String {
        let mut tokens = line.split_whitespace();

        let Some(word) = tokens.next() else {
            return input_error(&ContactError::EmptyInput);
        };
        let args: Vec<&str> = tokens.collect();

        let Some(command) = find_command(word) else {
            return INVALID_COMMAND.to_string();
        };

        if command.action == CommandAction::Exit {
            self.state = ReplState::Terminated;
        }

        execute(command.action, &args, &mut self.book, &self.settings)
    }

    /// Run until `close`/`exit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> ContactResult<()> {
        info!(
            window_days = self.settings.birthday_window_days,
            "starting session"
        );
        writeln!(output, "{}", self.settings.greeting)?;

        // Bytes, not `read_line`: a line that is not UTF-8 is bad input, not
        // a reason to end the session
        let mut buf = Vec::new();
        while self.state == ReplState::Running {
            write!(output, "{}", self.settings.prompt)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                info!("end of input");
                writeln!(output)?;
                let reply = self.handle_line("exit");
                writeln!(output, "{}", reply)?;
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            let reply = self.handle_line(&line);
            writeln!(output, "{}", reply)?;
        }

        info!(contacts = self.book.len(), "session finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str) -> String {
        let mut repl = Repl::new(Settings::default());
        let mut output = Vec::new();
        repl.run(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let repl = Repl::new(Settings::default());
        assert_eq!(repl.state(), ReplState::Running);
        assert!(repl.book().is_empty());
    }

    #[test]
    fn test_exit_and_close_terminate() {
        for word in ["exit", "close"] {
            let mut repl = Repl::new(Settings::default());
            assert_eq!(repl.handle_line(word), "Good bye!");
            assert_eq!(repl.state(), ReplState::Terminated);
        }
    }

    #[test]
    fn test_other_commands_keep_running() {
        let mut repl = Repl::new(Settings::default());
        assert_eq!(repl.handle_line("hello"), "How can I help you?");
        assert_eq!(repl.handle_line("frobnicate"), "Invalid command.");
        assert_eq!(repl.handle_line("EXIT"), "Invalid command.");
        assert_eq!(repl.handle_line("add"), "Input error: missing required argument: name");
        assert_eq!(repl.state(), ReplState::Running);
    }

    #[test]
    fn test_blank_line() {
        let mut repl = Repl::new(Settings::default());
        assert_eq!(repl.handle_line("   \n"), "Input error: no command entered");
        assert_eq!(repl.state(), ReplState::Running);
    }

    #[test]
    fn test_tokens_split_on_any_whitespace() {
        let mut repl = Repl::new(Settings::default());
        assert_eq!(repl.handle_line("  add\tJohn   1234567890 \n"), "Contact added.");
        assert_eq!(repl.handle_line("phone John"), "John: 1234567890");
    }

    #[test]
    fn test_session_transcript() {
        let output = session("hello\nadd John 1234567890\nphone John\nexit\nadd Jane\n");
        assert_eq!(
            output,
            "Welcome to the assistant bot!\n\
             Enter a command: How can I help you?\n\
             Enter a command: Contact added.\n\
             Enter a command: John: 1234567890\n\
             Enter a command: Good bye!\n"
        );
    }

    #[test]
    fn test_invalid_utf8_line_keeps_session() {
        let mut repl = Repl::new(Settings::default());
        let mut output = Vec::new();
        let input: &[u8] = b"add John 1234567890\nphone \xff\xfe\nphone John\nexit\n";

        repl.run(input, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Enter a command: Contact not found.\n"));
        assert!(output.contains("John: 1234567890"));
        assert!(output.ends_with("Good bye!\n"));
        assert_eq!(repl.state(), ReplState::Terminated);
    }

    #[test]
    fn test_session_ends_at_eof() {
        let output = session("add John\n");
        assert!(output.ends_with("Enter a command: \nGood bye!\n"));
    }
}
