use crate::database::error::DatabaseError;

pub(crate) mod checkin;
pub(crate) mod coach;
pub(crate) mod coach_schedule;
pub(crate) mod email_log;
pub(crate) mod member;
pub(crate) mod training_session;
pub(crate) mod workout;

type Result<T, E = DatabaseError> = std::result::Result<T, E>;
