use crate::database::error::DatabaseError;
use chrono::NaiveTime;
use diesel::prelude::*;
use std::str::FromStr;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::database::schema::coach_schedule)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct CoachSchedule {
    id: i32,
    coach_id: i32,
    day_of_week: i32,
    start_time: String,
    end_time: String,
    is_available: bool,
    max_clients: i32,
}

impl TryFrom<CoachSchedule> for dto::coach_schedule::CoachSchedule {
    type Error = DatabaseError;

    fn try_from(value: CoachSchedule) -> Result<Self, Self::Error> {
        let start_time = NaiveTime::from_str(&value.start_time)?;
        let end_time = NaiveTime::from_str(&value.end_time)?;

        Ok(dto::coach_schedule::CoachSchedule::new(
            value.id,
            value.coach_id,
            value.day_of_week as u8,
            start_time,
            end_time,
            value.is_available,
            value.max_clients as u32,
        ))
    }
}
