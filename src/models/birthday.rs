//! Birthday value object
//!
//! Birthdays are entered and shown as `DD.MM.YYYY` and stored as a calendar
//! date.

use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::error::{ContactError, ContactResult};

/// Input and display format for birthdays
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A contact's date of birth
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`
    ///
    /// Day and month must be zero-padded to two digits and the year must have
    /// four digits.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::Validation` if the layout is wrong or the text
    /// does not name a real calendar date (e.g. `31.02.2024`).
    pub fn parse(s: &str) -> ContactResult<Self> {
        if !has_date_layout(s) {
            return Err(ContactError::invalid_birthday());
        }

        NaiveDate::parse_from_str(s, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ContactError::invalid_birthday())
    }

    /// This birthday's month and day placed in `year`
    ///
    /// 29 February falls on 28 February when `year` is not a leap year,
    /// rather than failing the whole upcoming-birthdays query.
    pub fn in_year(&self, year: i32) -> NaiveDate {
        self.0
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, self.0.month(), 28))
            .unwrap_or(self.0)
    }
}

/// `DD.MM.YYYY`: ten bytes, dots at 2 and 5, digits everywhere else
fn has_date_layout(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
