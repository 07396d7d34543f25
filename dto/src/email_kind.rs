use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Every kind of email the system can record in its log.
/// Only the first four can be triggered through the dispatcher;
/// the reminder kinds exist as log entries written by other flows.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum EmailKind {
    Subscription,
    Inactivity,
    Birthday,
    Motivational,
    WorkoutReminder,
    SessionReminder,
}

impl Display for EmailKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EmailKind::Subscription => write!(f, "subscription"),
            EmailKind::Inactivity => write!(f, "inactivity"),
            EmailKind::Birthday => write!(f, "birthday"),
            EmailKind::Motivational => write!(f, "motivational"),
            EmailKind::WorkoutReminder => write!(f, "workout_reminder"),
            EmailKind::SessionReminder => write!(f, "session_reminder"),
        }
    }
}

impl FromStr for EmailKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "subscription" => Ok(EmailKind::Subscription),
            "inactivity" => Ok(EmailKind::Inactivity),
            "birthday" => Ok(EmailKind::Birthday),
            "motivational" => Ok(EmailKind::Motivational),
            "workout_reminder" => Ok(EmailKind::WorkoutReminder),
            "session_reminder" => Ok(EmailKind::SessionReminder),
            _ => Err(format!("Unknown email kind: {s}")),
        }
    }
}
