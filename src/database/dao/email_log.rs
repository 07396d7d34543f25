use super::Result;
use crate::database::model::email_log::EmailLog;
use crate::database::model::format_datetime;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use dto::email_kind::EmailKind;
use dto::email_log_entry::{EmailLogEntry, EmailStatus, NewEmailLogEntry};

/// Append one dispatch attempt to the log. Entries are never updated afterwards.
pub fn insert_entry(
    connection: &mut SqliteConnection,
    entry: &NewEmailLogEntry,
) -> Result<EmailLogEntry> {
    use crate::database::schema::email_log::*;

    let result = diesel::insert_into(crate::database::schema::email_log::table)
        .values((
            member_id.eq(entry.member_id()),
            kind.eq(entry.kind().to_string()),
            sent_at.eq(format_datetime(entry.sent_at())),
            status.eq(entry.status().to_string()),
            error_message.eq(entry.error_message().clone()),
            subject.eq(entry.subject()),
            content.eq(entry.content()),
        ))
        .returning(EmailLog::as_returning())
        .get_result(connection)?;

    EmailLogEntry::try_from(result)
}

/// Whether the member already received this kind of email since `since`.
/// Only successful sends count; failed attempts don't consume the cooldown.
pub fn has_sent_entry_since(
    connection: &mut SqliteConnection,
    target_member_id: i32,
    target_kind: &EmailKind,
    since: NaiveDateTime,
) -> Result<bool> {
    use crate::database::schema::email_log::*;

    let count: i64 = crate::database::schema::email_log::dsl::email_log
        .filter(member_id.eq(target_member_id))
        .filter(kind.eq(target_kind.to_string()))
        .filter(status.eq(EmailStatus::Sent.to_string()))
        .filter(sent_at.ge(format_datetime(&since)))
        .count()
        .get_result(connection)?;

    Ok(count > 0)
}

pub fn retrieve_entries(
    connection: &mut SqliteConnection,
    target_member_id: Option<i32>,
    target_kind: Option<&EmailKind>,
) -> Result<Vec<EmailLogEntry>> {
    use crate::database::schema::email_log::*;

    let mut query = crate::database::schema::email_log::dsl::email_log
        .select(EmailLog::as_select())
        .into_boxed();
    if let Some(target_member_id) = target_member_id {
        query = query.filter(member_id.eq(target_member_id));
    }
    if let Some(target_kind) = target_kind {
        query = query.filter(kind.eq(target_kind.to_string()));
    }

    let results = query.order(sent_at.desc()).load(connection)?;

    let entries = {
        let mut entries = Vec::new();
        for result in results {
            entries.push(EmailLogEntry::try_from(result)?);
        }

        entries
    };

    Ok(entries)
}
