use crate::email_kind::EmailKind;
use chrono::NaiveDateTime;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum EmailStatus {
    Sent,
    Failed,
    Pending,
}

impl Display for EmailStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EmailStatus::Sent => write!(f, "sent"),
            EmailStatus::Failed => write!(f, "failed"),
            EmailStatus::Pending => write!(f, "pending"),
        }
    }
}

impl FromStr for EmailStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sent" => Ok(EmailStatus::Sent),
            "failed" => Ok(EmailStatus::Failed),
            "pending" => Ok(EmailStatus::Pending),
            _ => Err(format!("Unknown email status: {s}")),
        }
    }
}

/// One dispatch attempt, success or failure. Append-only: entries are
/// written once and never mutated afterwards.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct EmailLogEntry {
    id: i32,
    member_id: i32,
    kind: EmailKind,
    sent_at: NaiveDateTime,
    status: EmailStatus,
    error_message: Option<String>,
    subject: String,
    content: String,
}

impl EmailLogEntry {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i32,
        member_id: i32,
        kind: EmailKind,
        sent_at: NaiveDateTime,
        status: EmailStatus,
        error_message: Option<String>,
        subject: String,
        content: String,
    ) -> Self {
        Self {
            id,
            member_id,
            kind,
            sent_at,
            status,
            error_message,
            subject,
            content,
        }
    }
}

/// A dispatch attempt about to be recorded.
#[derive(Debug, Getters, PartialEq, Eq, Clone)]
pub struct NewEmailLogEntry {
    member_id: i32,
    kind: EmailKind,
    sent_at: NaiveDateTime,
    status: EmailStatus,
    error_message: Option<String>,
    subject: String,
    content: String,
}

impl NewEmailLogEntry {
    pub fn new(
        member_id: i32,
        kind: EmailKind,
        sent_at: NaiveDateTime,
        status: EmailStatus,
        error_message: Option<String>,
        subject: String,
        content: String,
    ) -> Self {
        Self {
            member_id,
            kind,
            sent_at,
            status,
            error_message,
            subject,
            content,
        }
    }
}
