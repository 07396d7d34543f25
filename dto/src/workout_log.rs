use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct WorkoutLog {
    id: i32,
    member_id: i32,
    date: NaiveDate,
    duration_minutes: u32,
    notes: Option<String>,
    completed: bool,
}

impl WorkoutLog {
    pub fn new(
        id: i32,
        member_id: i32,
        date: NaiveDate,
        duration_minutes: u32,
        notes: Option<String>,
        completed: bool,
    ) -> Self {
        Self {
            id,
            member_id,
            date,
            duration_minutes,
            notes,
            completed,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct NewWorkoutLog {
    member_id: i32,
    date: NaiveDate,
    duration_minutes: u32,
    notes: Option<String>,
    #[serde(default)]
    completed: bool,
}

impl NewWorkoutLog {
    pub fn new(
        member_id: i32,
        date: NaiveDate,
        duration_minutes: u32,
        notes: Option<String>,
        completed: bool,
    ) -> Self {
        Self {
            member_id,
            date,
            duration_minutes,
            notes,
            completed,
        }
    }
}
