//! Derivations of a member's temporal status. `today` always comes from the
//! caller so the same member can be evaluated against any reference day.

use chrono::{Datelike, NaiveDate};
use dto::member::Member;

/// Days until the subscription is due; negative once it has lapsed.
pub fn days_until_due(member: &Member, today: NaiveDate) -> i64 {
    (*member.subscription_due_date() - today).num_days()
}

pub fn is_due_soon(member: &Member, today: NaiveDate) -> bool {
    (0..=5).contains(&days_until_due(member, today))
}

pub fn is_overdue(member: &Member, today: NaiveDate) -> bool {
    days_until_due(member, today) < 0
}

pub fn days_since_checkin(member: &Member, today: NaiveDate) -> Option<i64> {
    member
        .last_checkin_date()
        .map(|last_checkin_date| (today - last_checkin_date).num_days())
}

/// Members who never checked in are not considered inactive:
/// there is no visit to measure the gap from.
pub fn is_inactive(member: &Member, today: NaiveDate) -> bool {
    days_since_checkin(member, today).is_some_and(|days| days > 7)
}

/// Year is ignored: a 1990 birthday matches every June 15th.
pub fn is_birthday_today(member: &Member, today: NaiveDate) -> bool {
    member.birthday().is_some_and(|birthday| {
        birthday.month() == today.month() && birthday.day() == today.day()
    })
}

/// Age in years, when the stored birth year is a real one.
/// Imports sometimes carry placeholder years; those yield no age.
pub fn age(member: &Member, today: NaiveDate) -> Option<i32> {
    member
        .birthday()
        .filter(|birthday| birthday.year() > 1900)
        .map(|birthday| today.year() - birthday.year())
}
