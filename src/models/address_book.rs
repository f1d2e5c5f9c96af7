//! In-memory address book
//!
//! Records are keyed by exact name and kept in insertion order. Replacing a
//! record under an existing name keeps its original position.

use chrono::{Local, NaiveDateTime};

use super::birthday::Birthday;
use super::name::Name;
use super::record::Record;

/// A contact whose birthday falls inside the requested window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: Name,
    pub birthday: Birthday,
}

/// The collection of all records, keyed by name
#[derive(Debug, Default)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, silently replacing any existing one
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Find a record by exact name
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Find a record by exact name for in-place changes
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove and drop the record if present
    pub fn delete(&mut self, name: &str) {
        if let Some(index) = self.position(name) {
            self.records.remove(index);
        }
    }

    /// Records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose next birthday is at most `days` days from now
    pub fn get_upcoming_birthdays(&self, days: i64) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_at(days, Local::now().naive_local())
    }

    /// Contacts whose next birthday is at most `days` days from `now`, in
    /// insertion order
    pub fn upcoming_birthdays_at(&self, days: i64, now: NaiveDateTime) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let remaining = record.days_to_birthday_at(now)?;
                (remaining <= days).then(|| UpcomingBirthday {
                    name: record.name().clone(),
                    birthday: *birthday,
                })
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}
