use crate::database::error::DatabaseError;
use chrono::{NaiveDate, NaiveTime};
use diesel::prelude::*;
use dto::session_status::SessionStatus;
use std::str::FromStr;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::database::schema::training_session)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct TrainingSession {
    id: i32,
    coach_id: i32,
    title: String,
    date: String,
    start_time: String,
    end_time: String,
    max_participants: i32,
    status: String,
}

impl TrainingSession {
    pub(crate) fn id(&self) -> i32 {
        self.id
    }

    /// The participant count lives in the join table, so the caller provides it.
    pub(crate) fn try_into_dto(
        self,
        current_participants: u32,
    ) -> Result<dto::training_session::TrainingSession, DatabaseError> {
        let date = NaiveDate::from_str(&self.date)?;
        let start_time = NaiveTime::from_str(&self.start_time)?;
        let end_time = NaiveTime::from_str(&self.end_time)?;
        let status =
            SessionStatus::from_str(&self.status).map_err(DatabaseError::InvalidStoredValue)?;

        Ok(dto::training_session::TrainingSession::new(
            self.id,
            self.coach_id,
            self.title,
            date,
            start_time,
            end_time,
            self.max_participants as u32,
            status,
            current_participants,
        ))
    }
}
