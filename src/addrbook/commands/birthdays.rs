use crate::book::{AddressBook, UpcomingBirthday};
use crate::commands::helpers::{leading_args, record, record_mut};
use crate::commands::CmdMessage;
use crate::error::Result;
use crate::model::BIRTHDAY_FORMAT;
use chrono::NaiveDate;

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add<S: AsRef<str>>(book: &mut AddressBook, args: &[S]) -> Result<CmdMessage> {
    let [name, birthday] = leading_args::<2, _>(args)?;
    record_mut(book, name)?.add_birthday(birthday)?;
    Ok(CmdMessage::success("Birthday added."))
}

/// `show-birthday <name>`
pub fn show<S: AsRef<str>>(book: &AddressBook, args: &[S]) -> Result<CmdMessage> {
    let [name] = leading_args::<1, _>(args)?;
    let message = match record(book, name)?.birthday() {
        Some(birthday) => CmdMessage::info(birthday.to_string()),
        None => CmdMessage::info("Birthday not set."),
    };
    Ok(message)
}

/// `birthdays`: contacts whose birthday falls in the coming week.
pub fn upcoming(book: &AddressBook, today: NaiveDate) -> Result<CmdMessage> {
    let upcoming = book.upcoming_birthdays(today);
    if upcoming.is_empty() {
        return Ok(CmdMessage::info("No upcoming birthdays."));
    }
    let lines: Vec<String> = upcoming.iter().map(upcoming_line).collect();
    Ok(CmdMessage::info(lines.join("\n")))
}

fn upcoming_line(entry: &UpcomingBirthday<'_>) -> String {
    let name = entry.record.name();
    let birthday = entry
        .record
        .birthday()
        .map(|b| b.to_string())
        .unwrap_or_else(|| "Not set".to_string());

    if entry.congratulation_date == entry.date {
        format!("{}: {}", name, birthday)
    } else {
        format!(
            "{}: {} (congratulate on {})",
            name,
            birthday,
            entry.congratulation_date.format(BIRTHDAY_FORMAT)
        )
    }
}
