//! Record display formatting

use crate::models::{AddressBook, Record};

/// Format a record as `name: phone1, phone2`
pub fn format_record_line(record: &Record) -> String {
    let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
    format!("{}: {}", record.name(), phones.join(", "))
}

/// One line per record, in book order
pub fn format_record_list(book: &AddressBook) -> String {
    book.iter()
        .map(format_record_line)
        .collect::<Vec<_>>()
        .join("\n")
}
