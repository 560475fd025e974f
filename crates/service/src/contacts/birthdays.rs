//! Upcoming-birthday selection.
//!
//! A contact qualifies when the next occurrence of its birthday (this year's,
//! or next year's once this year's has passed) is 0 to
//! [`BIRTHDAY_WINDOW_DAYS`] days away. Stored dates that do not parse as
//! `YYYY-MM-DD`, or whose month/day does not exist in the occurrence year
//! (Feb 29 outside leap years), are skipped.

use chrono::{Datelike, NaiveDate};

use super::domain::{Contact, UpcomingBirthday};

/// Inclusive upper bound of the window, in days from today.
pub const BIRTHDAY_WINDOW_DAYS: i64 = 30;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Next occurrence of `birth_date` on or after `today`.
pub fn next_occurrence(birth_date: &str, today: NaiveDate) -> Option<NaiveDate> {
    let born = NaiveDate::parse_from_str(birth_date, DATE_FORMAT).ok()?;
    let this_year = NaiveDate::from_ymd_opt(today.year(), born.month(), born.day())?;
    if this_year < today {
        NaiveDate::from_ymd_opt(today.year() + 1, born.month(), born.day())
    } else {
        Some(this_year)
    }
}

/// Whole days from `today` until the next occurrence of `birth_date`.
pub fn days_until(birth_date: &str, today: NaiveDate) -> Option<i64> {
    next_occurrence(birth_date, today).map(|next| (next - today).num_days())
}

/// Contacts whose birthday falls within the window, ordered by the stored
/// `MM-DD` text (so `01-05` precedes `12-20` even when December is nearer).
pub fn upcoming_birthdays(contacts: &[Contact], today: NaiveDate) -> Vec<UpcomingBirthday> {
    let mut upcoming: Vec<UpcomingBirthday> = contacts
        .iter()
        .filter_map(|c| {
            let birth_date = c.birth_date.as_deref().filter(|b| !b.is_empty())?;
            let days = days_until(birth_date, today)?;
            (0..=BIRTHDAY_WINDOW_DAYS).contains(&days).then(|| UpcomingBirthday {
                id: c.id,
                name: c.name.clone(),
                birth_date: birth_date.to_string(),
                phones: c.phones.clone(),
            })
        })
        .collect();
    upcoming.sort_by(|a, b| month_day(&a.birth_date).cmp(month_day(&b.birth_date)));
    upcoming
}

fn month_day(birth_date: &str) -> &str {
    birth_date.get(5..).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contact(id: i32, birth_date: Option<&str>) -> Contact {
        Contact {
            id,
            name: format!("c{id}"),
            email: None,
            address: None,
            birth_date: birth_date.map(Into::into),
            group: "default".into(),
            phones: vec![format!("{id}00")],
        }
    }

    #[test]
    fn includes_birthday_two_weeks_out() {
        let today = date(2024, 6, 1);
        assert_eq!(days_until("2024-06-15", today), Some(14));
        let got = upcoming_birthdays(&[contact(1, Some("2024-06-15"))], today);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].id, 1);
        assert_eq!(got[0].birth_date, "2024-06-15");
        assert_eq!(got[0].phones, vec!["100"]);
    }

    #[test]
    fn passed_birthday_rolls_to_next_year() {
        let today = date(2024, 6, 1);
        assert_eq!(next_occurrence("1990-05-01", today), Some(date(2025, 5, 1)));
        assert!(upcoming_birthdays(&[contact(1, Some("2024-05-01"))], today).is_empty());
    }

    #[test]
    fn today_and_window_edges() {
        let today = date(2024, 6, 1);
        assert_eq!(days_until("1980-06-01", today), Some(0));
        assert_eq!(days_until("1980-07-01", today), Some(30));
        assert_eq!(days_until("1980-07-02", today), Some(31));

        let got = upcoming_birthdays(
            &[contact(1, Some("1980-06-01")), contact(2, Some("1980-07-01")), contact(3, Some("1980-07-02"))],
            today,
        );
        let ids: Vec<_> = got.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn skips_missing_empty_and_unparsable_dates() {
        let today = date(2024, 6, 1);
        let got = upcoming_birthdays(
            &[contact(1, None), contact(2, Some("")), contact(3, Some("invalid")), contact(4, Some("2001-06-10"))],
            today,
        );
        let ids: Vec<_> = got.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn feb_29_skipped_outside_leap_years() {
        assert_eq!(next_occurrence("2000-02-29", date(2023, 2, 10)), None);
        assert_eq!(next_occurrence("2000-02-29", date(2024, 2, 10)), Some(date(2024, 2, 29)));
        // this year's date is valid but past, next year's is not
        assert_eq!(next_occurrence("2000-02-29", date(2024, 3, 10)), None);
    }

    #[test]
    fn year_wrap_keeps_lexicographic_month_day_order() {
        let today = date(2024, 12, 15);
        let got = upcoming_birthdays(
            &[contact(1, Some("1990-12-20")), contact(2, Some("1985-01-05"))],
            today,
        );
        let order: Vec<_> = got.iter().map(|b| b.birth_date.as_str()).collect();
        // December 20 is nearer but "01-05" < "12-20"
        assert_eq!(order, vec!["1985-01-05", "1990-12-20"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let today = date(2024, 6, 1);
        let got = upcoming_birthdays(
            &[contact(7, Some("1990-06-03")), contact(3, Some("2000-06-03"))],
            today,
        );
        let ids: Vec<_> = got.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![7, 3]);
    }
}
