//! Core data models for the contact book
//!
//! Field value types (name, phone, birthday), the per-contact record, and
//! the address book that owns all records.

pub mod address_book;
pub mod birthday;
pub mod name;
pub mod phone;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday};
pub use birthday::Birthday;
pub use name::Name;
pub use phone::Phone;
pub use record::Record;
