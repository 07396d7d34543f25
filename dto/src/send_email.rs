use crate::email_kind::EmailKind;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Request body for triggering a notification dispatch.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct SendEmailRequest {
    kind: EmailKind,
    member_ids: Option<Vec<i32>>,
    #[serde(default)]
    force_send: bool,
}

impl SendEmailRequest {
    pub fn new(kind: EmailKind, member_ids: Option<Vec<i32>>, force_send: bool) -> Self {
        Self {
            kind,
            member_ids,
            force_send,
        }
    }
}

/// Outcome counters of one dispatch run. The email log is the durable
/// record; this is a convenience summary for the caller.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone, Default)]
pub struct SendSummary {
    sent: u32,
    failed: u32,
}

impl SendSummary {
    pub fn new(sent: u32, failed: u32) -> Self {
        Self { sent, failed }
    }

    pub fn record_sent(&mut self) {
        self.sent += 1;
    }

    pub fn record_failed(&mut self) {
        self.failed += 1;
    }
}
