//! Command handlers
//!
//! Each handler takes the arguments after the command word and the address
//! book, and returns the text to print. Errors are reported by the
//! dispatcher in [`execute`], never by the handlers themselves.

use tracing::{debug, warn};

use super::commands::CommandAction;
use crate::config::Settings;
use crate::display::{
    format_birthday, format_record_line, format_record_list, format_upcoming_birthdays,
};
use crate::error::{ContactError, ContactResult};
use crate::models::{AddressBook, Record};

const NOT_FOUND: &str = "Contact not found.";
const BIRTHDAY_NOT_FOUND: &str = "Birthday not found for this contact.";

/// Fetch a positional argument or fail with `MissingArgument`
fn arg<'a>(args: &[&'a str], index: usize, name: &'static str) -> ContactResult<&'a str> {
    args.get(index).copied().ok_or(ContactError::MissingArgument(name))
}

/// `add <name> [phone]`
///
/// Creates the contact if it is unknown, then appends the phone if one was
/// given. A new contact is kept even when its phone fails validation.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> ContactResult<String> {
    let name = arg(args, 0, "name")?;

    let message = if book.find(name).is_some() {
        "Contact updated."
    } else {
        book.add_record(Record::new(name));
        "Contact added."
    };

    if let (Some(phone), Some(record)) = (args.get(1), book.find_mut(name)) {
        record.add_phone(phone)?;
    }

    Ok(message.to_string())
}

/// `change <name> <new_phone>`: replace the first stored phone
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> ContactResult<String> {
    let name = arg(args, 0, "name")?;
    let new_phone = arg(args, 1, "new_phone")?;

    let Some(record) = book.find_mut(name) else {
        return Ok(NOT_FOUND.to_string());
    };

    let old_phone = record
        .phones()
        .first()
        .map(|p| p.as_str().to_string())
        .ok_or_else(|| ContactError::NoPhoneToChange(name.to_string()))?;

    record.edit_phone(&old_phone, new_phone)?;
    Ok("Phone number updated.".to_string())
}

/// `phone <name>`
pub fn show_phone(args: &[&str], book: &AddressBook) -> ContactResult<String> {
    let name = arg(args, 0, "name")?;

    Ok(book
        .find(name)
        .map(format_record_line)
        .unwrap_or_else(|| NOT_FOUND.to_string()))
}

/// `all`
pub fn show_all(book: &AddressBook) -> ContactResult<String> {
    Ok(format_record_list(book))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> ContactResult<String> {
    let name = arg(args, 0, "name")?;
    let birthday = arg(args, 1, "birthday")?;

    match book.find_mut(name) {
        Some(record) => {
            record.add_birthday(birthday)?;
            Ok("Birthday added.".to_string())
        }
        None => Ok(NOT_FOUND.to_string()),
    }
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> ContactResult<String> {
    let name = arg(args, 0, "name")?;

    Ok(book
        .find(name)
        .and_then(|record| record.birthday().map(|b| format_birthday(record.name(), b)))
        .unwrap_or_else(|| BIRTHDAY_NOT_FOUND.to_string()))
}

/// `birthdays`
pub fn birthdays(book: &AddressBook, window_days: i64) -> ContactResult<String> {
    let upcoming = book.get_upcoming_birthdays(window_days);
    Ok(format_upcoming_birthdays(&upcoming, window_days))
}

/// Run the handler for `action` and turn any error into `Input error: ...`
pub fn execute(
    action: CommandAction,
    args: &[&str],
    book: &mut AddressBook,
    settings: &Settings,
) -> String {
    debug!(?action, args = args.len(), "dispatching command");

    let result = match action {
        CommandAction::Hello => Ok("How can I help you?".to_string()),
        CommandAction::AddContact => add_contact(args, book),
        CommandAction::ChangeContact => change_contact(args, book),
        CommandAction::ShowPhone => show_phone(args, book),
        CommandAction::ShowAll => show_all(book),
        CommandAction::AddBirthday => add_birthday(args, book),
        CommandAction::ShowBirthday => show_birthday(args, book),
        CommandAction::Birthdays => birthdays(book, settings.birthday_window_days),
        CommandAction::Exit => Ok("Good bye!".to_string()),
    };

    result.unwrap_or_else(|err| input_error(&err))
}

/// Format an error the way the REPL reports it
pub fn input_error(err: &ContactError) -> String {
    warn!(error = %err, "command failed");
    format!("Input error: {}", err)
}
