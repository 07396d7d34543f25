use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl Display for DifficultyLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DifficultyLevel::Beginner => write!(f, "beginner"),
            DifficultyLevel::Intermediate => write!(f, "intermediate"),
            DifficultyLevel::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for DifficultyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(DifficultyLevel::Beginner),
            "intermediate" => Ok(DifficultyLevel::Intermediate),
            "advanced" => Ok(DifficultyLevel::Advanced),
            _ => Err(format!("Unknown difficulty level: {s}")),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct WorkoutPlan {
    id: i32,
    name: String,
    description: String,
    difficulty_level: DifficultyLevel,
    duration_weeks: u32,
    sessions_per_week: u32,
    coach_id: i32,
    is_public: bool,
}

impl WorkoutPlan {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i32,
        name: String,
        description: String,
        difficulty_level: DifficultyLevel,
        duration_weeks: u32,
        sessions_per_week: u32,
        coach_id: i32,
        is_public: bool,
    ) -> Self {
        Self {
            id,
            name,
            description,
            difficulty_level,
            duration_weeks,
            sessions_per_week,
            coach_id,
            is_public,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct NewWorkoutPlan {
    name: String,
    description: String,
    difficulty_level: DifficultyLevel,
    duration_weeks: u32,
    sessions_per_week: u32,
    coach_id: i32,
    #[serde(default = "default_is_public")]
    is_public: bool,
}

fn default_is_public() -> bool {
    true
}

/// Request to put a member on a plan for a date range.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct AssignWorkoutPlan {
    member_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl AssignWorkoutPlan {
    pub fn new(member_id: i32, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            member_id,
            start_date,
            end_date,
        }
    }
}

impl NewWorkoutPlan {
    pub fn new(
        name: String,
        description: String,
        difficulty_level: DifficultyLevel,
        duration_weeks: u32,
        sessions_per_week: u32,
        coach_id: i32,
        is_public: bool,
    ) -> Self {
        Self {
            name,
            description,
            difficulty_level,
            duration_weeks,
            sessions_per_week,
            coach_id,
            is_public,
        }
    }
}
