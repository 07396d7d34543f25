use crate::database::error::DatabaseError;
use chrono::NaiveDate;
use diesel::prelude::*;
use dto::workout_plan::DifficultyLevel;
use std::str::FromStr;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::database::schema::workout_plan)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct WorkoutPlan {
    id: i32,
    name: String,
    description: String,
    difficulty_level: String,
    duration_weeks: i32,
    sessions_per_week: i32,
    coach_id: i32,
    is_public: bool,
}

impl TryFrom<WorkoutPlan> for dto::workout_plan::WorkoutPlan {
    type Error = DatabaseError;

    fn try_from(value: WorkoutPlan) -> Result<Self, Self::Error> {
        let difficulty_level = DifficultyLevel::from_str(&value.difficulty_level)
            .map_err(DatabaseError::InvalidStoredValue)?;

        Ok(dto::workout_plan::WorkoutPlan::new(
            value.id,
            value.name,
            value.description,
            difficulty_level,
            value.duration_weeks as u32,
            value.sessions_per_week as u32,
            value.coach_id,
            value.is_public,
        ))
    }
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::database::schema::workout_log)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct WorkoutLog {
    id: i32,
    member_id: i32,
    date: String,
    duration_minutes: i32,
    notes: Option<String>,
    completed: bool,
}

impl TryFrom<WorkoutLog> for dto::workout_log::WorkoutLog {
    type Error = DatabaseError;

    fn try_from(value: WorkoutLog) -> Result<Self, Self::Error> {
        let date = NaiveDate::from_str(&value.date)?;

        Ok(dto::workout_log::WorkoutLog::new(
            value.id,
            value.member_id,
            date,
            value.duration_minutes as u32,
            value.notes,
            value.completed,
        ))
    }
}
