use crate::database::error::DatabaseError;
use crate::database::model::parse_datetime;
use diesel::prelude::*;
use dto::email_kind::EmailKind;
use dto::email_log_entry::EmailStatus;
use std::str::FromStr;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::database::schema::email_log)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct EmailLog {
    id: i32,
    member_id: i32,
    kind: String,
    sent_at: String,
    status: String,
    error_message: Option<String>,
    subject: String,
    content: String,
}

impl TryFrom<EmailLog> for dto::email_log_entry::EmailLogEntry {
    type Error = DatabaseError;

    fn try_from(value: EmailLog) -> Result<Self, Self::Error> {
        let kind = EmailKind::from_str(&value.kind).map_err(DatabaseError::InvalidStoredValue)?;
        let sent_at = parse_datetime(&value.sent_at)?;
        let status =
            EmailStatus::from_str(&value.status).map_err(DatabaseError::InvalidStoredValue)?;

        Ok(dto::email_log_entry::EmailLogEntry::new(
            value.id,
            value.member_id,
            kind,
            sent_at,
            status,
            value.error_message,
            value.subject,
            value.content,
        ))
    }
}
