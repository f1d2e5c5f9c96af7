//! Contact record
//!
//! A record holds one contact: its name, any number of phones in the order
//! they were added, and an optional birthday.

use chrono::{Datelike, Local, NaiveDateTime, NaiveTime};

use super::birthday::Birthday;
use super::name::Name;
use super::phone::Phone;
use crate::error::ContactResult;

/// One contact's full data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone; duplicates are kept
    pub fn add_phone(&mut self, phone: &str) -> ContactResult<()> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove every phone equal to `phone`; nothing happens if none match
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Remove every `old` phone, then append `new`
    ///
    /// The removal happens first and is not undone when `new` fails
    /// validation.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        self.remove_phone(old);
        self.add_phone(new)
    }

    /// Validate and set the birthday, replacing any previous one
    pub fn add_birthday(&mut self, birthday: &str) -> ContactResult<()> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }

    /// Whole days from now until the next occurrence of the birthday
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_at(Local::now().naive_local())
    }

    /// Whole days from `now` until the next occurrence of the birthday
    ///
    /// The birthday is taken at midnight of `now`'s year and moved to the
    /// following year if that instant is already behind `now`. The time of
    /// day counts, so a birthday that started earlier today is a year away
    /// and one starting at the next midnight is 0 days away.
    pub fn days_to_birthday_at(&self, now: NaiveDateTime) -> Option<i64> {
        let birthday = self.birthday?;

        let mut next = birthday.in_year(now.year()).and_time(NaiveTime::MIN);
        if next < now {
            next = birthday.in_year(now.year() + 1).and_time(NaiveTime::MIN);
        }

        Some((next - now).num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn phone_strs(record: &Record) -> Vec<&str> {
        record.phones().iter().map(|p| p.as_str()).collect()
    }

    #[test]
    fn test_new_record() {
        let record = Record::new("John");
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
        assert_eq!(record.days_to_birthday(), None);
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let mut record = Record::new("John");
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(
            phone_strs(&record),
            vec!["1234567890", "0987654321", "1234567890"]
        );
    }

    #[test]
    fn test_add_invalid_phone_is_not_stored() {
        let mut record = Record::new("John");
        assert!(record.add_phone("12345").unwrap_err().is_validation());
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_remove_phone() {
        let mut record = Record::new("John");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();

        record.remove_phone("1111111111");
        assert_eq!(phone_strs(&record), vec!["2222222222"]);

        record.remove_phone("9999999999");
        assert_eq!(phone_strs(&record), vec!["2222222222"]);
    }

    #[test]
    fn test_edit_phone() {
        let mut record = Record::new("John");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("3333333333").unwrap();

        record.edit_phone("2222222222", "4444444444").unwrap();
        assert_eq!(
            phone_strs(&record),
            vec!["1111111111", "3333333333", "4444444444"]
        );
    }

    #[test]
    fn test_edit_missing_phone_still_appends() {
        let mut record = Record::new("John");
        record.add_phone("1111111111").unwrap();
        record.edit_phone("9999999999", "2222222222").unwrap();
        assert_eq!(phone_strs(&record), vec!["1111111111", "2222222222"]);
    }

    #[test]
    fn test_edit_phone_invalid_new_loses_old() {
        let mut record = Record::new("John");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();

        assert!(record.edit_phone("1111111111", "bad").is_err());
        assert_eq!(phone_strs(&record), vec!["2222222222"]);
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut record = Record::new("John");
        record.add_birthday("01.01.2030").unwrap();
        record.add_birthday("02.02.1990").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "02.02.1990");

        assert!(record.add_birthday("2.2.1990").is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "02.02.1990");
    }

    #[test]
    fn test_days_to_birthday_upcoming() {
        let mut record = Record::new("John");
        record.add_birthday("26.10.1990").unwrap();
        // 6 days and 12 hours away
        assert_eq!(record.days_to_birthday_at(at(2026, 10, 19, 12)), Some(6));
    }

    #[test]
    fn test_days_to_birthday_tomorrow_is_zero() {
        let mut record = Record::new("John");
        record.add_birthday("20.10.1990").unwrap();
        assert_eq!(record.days_to_birthday_at(at(2026, 10, 19, 12)), Some(0));
    }

    #[test]
    fn test_days_to_birthday_today_rolls_over() {
        let mut record = Record::new("John");
        record.add_birthday("19.10.1990").unwrap();
        assert_eq!(record.days_to_birthday_at(at(2026, 10, 19, 12)), Some(364));
        // At exactly midnight the birthday has not passed yet
        assert_eq!(record.days_to_birthday_at(at(2026, 10, 19, 0)), Some(0));
    }

    #[test]
    fn test_days_to_birthday_passed_this_year() {
        let mut record = Record::new("John");
        record.add_birthday("01.01.1990").unwrap();
        // 2027-01-01 00:00 minus 2026-10-19 12:00 is 73.5 days
        assert_eq!(record.days_to_birthday_at(at(2026, 10, 19, 12)), Some(73));
    }

    #[test]
    fn test_days_to_leap_day_birthday() {
        let mut record = Record::new("Leap");
        record.add_birthday("29.02.2000").unwrap();
        // Falls on 2027-02-28
        assert_eq!(record.days_to_birthday_at(at(2027, 2, 27, 0)), Some(1));
    }
}
