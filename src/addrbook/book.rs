//! # Address Book
//!
//! The in-memory collection of all [`Record`]s, keyed by the contact name.
//!
//! Records are kept in insertion order so that listing is reproducible across
//! runs. Re-adding a name replaces the stored record at its original position.
//!
//! ## Upcoming birthdays
//!
//! For each record with a birthday, the next occurrence is the birthday moved
//! into the current year, or into the next year if that date has already
//! passed. A record is upcoming when its occurrence lies within
//! `[today, today + 7]`.
//!
//! Greetings are not sent on weekends: an occurrence on Saturday or Sunday
//! carries a congratulation date on the following Monday. That date is for
//! display only and does not affect the window check.

use crate::model::Record;
use chrono::{Datelike, Days, NaiveDate, Weekday};

pub const UPCOMING_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingBirthday<'a> {
    pub record: &'a Record,
    /// Next occurrence of the birthday.
    pub date: NaiveDate,
    /// `date`, moved to Monday when it falls on a weekend.
    pub congratulation_date: NaiveDate,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut book = Self::new();
        for record in records {
            book.add_record(record);
        }
        book
    }

    /// Inserts `record` under its name, replacing any existing entry.
    pub fn add_record(&mut self, record: Record) {
        match self.position_of(record.name().as_str()) {
            Some(pos) => self.records[pos] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Removes the named record, returning it if it was present.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.position_of(name).map(|pos| self.records.remove(pos))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday<'_>> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = next_occurrence(birthday.date(), today)?;
                let delta = date.signed_duration_since(today).num_days();
                if !(0..=UPCOMING_WINDOW_DAYS).contains(&delta) {
                    return None;
                }
                Some(UpcomingBirthday {
                    record,
                    date,
                    congratulation_date: skip_weekend(date),
                })
            })
            .collect()
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

/// First anniversary of `birth` on or after `today`.
pub fn next_occurrence(birth: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in(birth, today.year())?;
    if this_year >= today {
        return Some(this_year);
    }
    anniversary_in(birth, today.year() + 1)
}

// 29 February falls back to 28 February in common years.
fn anniversary_in(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
    birth
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, birth.month(), 28))
}

fn skip_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Days::new(2),
        Weekday::Sun => date + Days::new(1),
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn with_birthday(name: &str, birthday: &str) -> Record {
        let mut record = Record::new(name).unwrap();
        record.add_birthday(birthday).unwrap();
        record
    }

    #[test]
    fn add_record_overwrites_in_place() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Alice").unwrap());
        book.add_record(Record::new("Bob").unwrap());

        let mut replacement = Record::new("Alice").unwrap();
        replacement.add_phone("1234567890").unwrap();
        book.add_record(replacement);

        assert_eq!(book.len(), 2);
        assert_eq!(book.records()[0].name().as_str(), "Alice");
        assert_eq!(book.records()[0].phones().len(), 1);
    }

    #[test]
    fn find_is_exact_match() {
        let book = AddressBook::from_records([Record::new("Alice").unwrap()]);
        assert!(book.find("Alice").is_some());
        assert!(book.find("alice").is_none());
        assert!(book.find("Ghost").is_none());
    }

    #[test]
    fn delete_missing_is_noop() {
        let mut book = AddressBook::from_records([Record::new("Alice").unwrap()]);
        assert!(book.delete("Ghost").is_none());
        assert_eq!(book.len(), 1);
        assert!(book.delete("Alice").is_some());
        assert!(book.is_empty());
    }

    #[test]
    fn listing_keeps_insertion_order() {
        let book = AddressBook::from_records(
            ["Zed", "Amy", "Mo"].map(|n| Record::new(n).unwrap()),
        );
        let names: Vec<_> = book.records().iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, ["Zed", "Amy", "Mo"]);
    }

    #[test]
    fn birthday_three_days_ahead_is_upcoming() {
        // Wednesday
        let today = ymd(2025, 6, 11);
        let book = AddressBook::from_records([
            with_birthday("Soon", "14.06.1990"),
            with_birthday("Later", "21.06.1990"),
        ]);

        let upcoming = book.upcoming_birthdays(today);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].record.name().as_str(), "Soon");
        assert_eq!(upcoming[0].date, ymd(2025, 6, 14));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let today = ymd(2025, 6, 11);
        let book = AddressBook::from_records([
            with_birthday("Today", "11.06.2000"),
            with_birthday("Edge", "18.06.2000"),
            with_birthday("Past", "10.06.2000"),
            with_birthday("Outside", "19.06.2000"),
        ]);

        let names: Vec<_> = book
            .upcoming_birthdays(today)
            .iter()
            .map(|u| u.record.name().as_str())
            .collect();
        assert_eq!(names, ["Today", "Edge"]);
    }

    #[test]
    fn weekend_birthday_is_congratulated_on_monday() {
        // 14.06.2025 is a Saturday, 15.06.2025 a Sunday.
        let today = ymd(2025, 6, 11);
        let book = AddressBook::from_records([
            with_birthday("Sat", "14.06.1990"),
            with_birthday("Sun", "15.06.1990"),
            with_birthday("Thu", "12.06.1990"),
        ]);

        let upcoming = book.upcoming_birthdays(today);
        assert_eq!(upcoming[0].congratulation_date, ymd(2025, 6, 16));
        assert_eq!(upcoming[1].congratulation_date, ymd(2025, 6, 16));
        assert_eq!(upcoming[2].congratulation_date, ymd(2025, 6, 12));
    }

    #[test]
    fn weekend_shift_does_not_widen_window() {
        // Occurrence 8 days out on a Saturday stays excluded.
        let today = ymd(2025, 6, 6);
        let book = AddressBook::from_records([with_birthday("Sat", "14.06.1990")]);
        assert!(book.upcoming_birthdays(today).is_empty());
    }

    #[test]
    fn occurrence_wraps_into_next_year() {
        let today = ymd(2025, 12, 29);
        let book = AddressBook::from_records([with_birthday("NewYear", "02.01.1985")]);

        let upcoming = book.upcoming_birthdays(today);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].date, ymd(2026, 1, 2));
    }

    #[test]
    fn leap_day_birthday_in_common_year() {
        assert_eq!(
            next_occurrence(ymd(2000, 2, 29), ymd(2025, 2, 25)),
            Some(ymd(2025, 2, 28))
        );
        assert_eq!(
            next_occurrence(ymd(2000, 2, 29), ymd(2028, 2, 25)),
            Some(ymd(2028, 2, 29))
        );
    }

    #[test]
    fn records_without_birthday_are_skipped() {
        let book = AddressBook::from_records([Record::new("NoDate").unwrap()]);
        assert!(book.upcoming_birthdays(ymd(2025, 1, 1)).is_empty());
    }
}
