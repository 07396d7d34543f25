use chrono::NaiveTime;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Remaining capacity of one coach schedule slot on a given day.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct SlotAvailability {
    schedule_id: i32,
    start_time: NaiveTime,
    end_time: NaiveTime,
    available_slots: u32,
    max_clients: u32,
}

impl SlotAvailability {
    pub fn new(
        schedule_id: i32,
        start_time: NaiveTime,
        end_time: NaiveTime,
        available_slots: u32,
        max_clients: u32,
    ) -> Self {
        Self {
            schedule_id,
            start_time,
            end_time,
            available_slots,
            max_clients,
        }
    }
}
