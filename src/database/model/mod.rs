use crate::database::error::DatabaseError;
use chrono::NaiveDateTime;

pub(crate) mod coach;
pub(crate) mod coach_schedule;
pub(crate) mod email_log;
pub(crate) mod member;
pub(crate) mod member_checkin;
pub(crate) mod training_session;
pub(crate) mod workout;

/// Timestamps are stored as text; this format sorts lexicographically
/// in the same order as chronologically, which the range filters rely on.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

pub(crate) fn format_datetime(value: &NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}

pub(crate) fn parse_datetime(value: &str) -> Result<NaiveDateTime, DatabaseError> {
    Ok(NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)?)
}
