//! Birthday display formatting

use crate::config::settings::DEFAULT_BIRTHDAY_WINDOW;
use crate::models::{Birthday, Name, UpcomingBirthday};

/// Format `name's birthday is on DD.MM.YYYY`
pub fn format_birthday(name: &Name, birthday: &Birthday) -> String {
    format!("{}'s birthday is on {}", name, birthday)
}

/// Format the result of an upcoming-birthdays query, one `name: date` per line
pub fn format_upcoming_birthdays(upcoming: &[UpcomingBirthday], window_days: i64) -> String {
    if upcoming.is_empty() {
        return if window_days == DEFAULT_BIRTHDAY_WINDOW {
            "No birthdays in the next week.".to_string()
        } else {
            format!("No birthdays in the next {} days.", window_days)
        };
    }

    upcoming
        .iter()
        .map(|u| format!("{}: {}", u.name, u.birthday))
        .collect::<Vec<_>>()
        .join("\n")
}
