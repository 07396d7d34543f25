use crate::session_status::SessionStatus;
use chrono::{NaiveDate, NaiveTime};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A scheduled training session.
/// `current_participants` is derived from the member set at load time.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct TrainingSession {
    id: i32,
    coach_id: i32,
    title: String,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    max_participants: u32,
    status: SessionStatus,
    current_participants: u32,
}

impl TrainingSession {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i32,
        coach_id: i32,
        title: String,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        max_participants: u32,
        status: SessionStatus,
        current_participants: u32,
    ) -> Self {
        Self {
            id,
            coach_id,
            title,
            date,
            start_time,
            end_time,
            max_participants,
            status,
            current_participants,
        }
    }

    pub fn is_full(&self) -> bool {
        self.current_participants >= self.max_participants
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct NewTrainingSession {
    coach_id: i32,
    title: String,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    max_participants: u32,
    #[serde(default)]
    status: SessionStatus,
}

impl NewTrainingSession {
    pub fn new(
        coach_id: i32,
        title: String,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        max_participants: u32,
        status: SessionStatus,
    ) -> Self {
        Self {
            coach_id,
            title,
            date,
            start_time,
            end_time,
            max_participants,
            status,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    impl TrainingSession {
        pub fn new_test(
            id: i32,
            coach_id: i32,
            date: NaiveDate,
            start_time: NaiveTime,
            end_time: NaiveTime,
        ) -> Self {
            TrainingSession {
                id,
                coach_id,
                title: "Strength basics".to_string(),
                date,
                start_time,
                end_time,
                max_participants: 1,
                status: SessionStatus::Scheduled,
                current_participants: 0,
            }
        }
    }

    #[test]
    fn should_be_full_when_participants_reach_max() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap();
        let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let end = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
        let mut session = TrainingSession::new_test(1, 1, date, start, end);
        assert!(!session.is_full());
        session.current_participants = 1;
        assert!(session.is_full());
    }
}
