use chrono::NaiveTime;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A recurring weekly availability slot for a coach.
/// `day_of_week` follows the Monday=0 through Sunday=6 convention.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct CoachSchedule {
    id: i32,
    coach_id: i32,
    day_of_week: u8,
    start_time: NaiveTime,
    end_time: NaiveTime,
    is_available: bool,
    max_clients: u32,
}

impl CoachSchedule {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i32,
        coach_id: i32,
        day_of_week: u8,
        start_time: NaiveTime,
        end_time: NaiveTime,
        is_available: bool,
        max_clients: u32,
    ) -> Self {
        Self {
            id,
            coach_id,
            day_of_week,
            start_time,
            end_time,
            is_available,
            max_clients,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct NewCoachSchedule {
    day_of_week: u8,
    start_time: NaiveTime,
    end_time: NaiveTime,
    #[serde(default = "default_is_available")]
    is_available: bool,
    max_clients: u32,
}

fn default_is_available() -> bool {
    true
}

impl NewCoachSchedule {
    pub fn new(
        day_of_week: u8,
        start_time: NaiveTime,
        end_time: NaiveTime,
        is_available: bool,
        max_clients: u32,
    ) -> Self {
        Self {
            day_of_week,
            start_time,
            end_time,
            is_available,
            max_clients,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    impl CoachSchedule {
        pub fn new_test(
            coach_id: i32,
            day_of_week: u8,
            start_time: NaiveTime,
            end_time: NaiveTime,
            max_clients: u32,
        ) -> Self {
            CoachSchedule {
                id: 1,
                coach_id,
                day_of_week,
                start_time,
                end_time,
                is_available: true,
                max_clients,
            }
        }
    }
}
