use chrono::NaiveDateTime;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A gym visit. Open while `checkout_time` is unset;
/// `duration_minutes` is computed once on checkout.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct Checkin {
    id: i32,
    member_id: i32,
    checkin_time: NaiveDateTime,
    checkout_time: Option<NaiveDateTime>,
    duration_minutes: Option<u32>,
}

impl Checkin {
    pub fn new(
        id: i32,
        member_id: i32,
        checkin_time: NaiveDateTime,
        checkout_time: Option<NaiveDateTime>,
        duration_minutes: Option<u32>,
    ) -> Self {
        Self {
            id,
            member_id,
            checkin_time,
            checkout_time,
            duration_minutes,
        }
    }

    pub fn is_open(&self) -> bool {
        self.checkout_time.is_none()
    }
}
