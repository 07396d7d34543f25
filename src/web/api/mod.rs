use chrono::NaiveDateTime;

pub mod checkins_controller;
pub mod coaches_controller;
pub mod emails_controller;
pub mod members_controller;
pub mod portal_controller;
pub mod server;
pub mod sessions_controller;
pub mod workouts_controller;

#[cfg(not(test))]
fn get_now() -> NaiveDateTime {
    chrono::offset::Utc::now().naive_utc()
}

/// Pinned clock for controller tests, matching the fixtures' reference day.
#[cfg(test)]
fn get_now() -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2025, 6, 15)
        .expect("Should be great for testing")
        .and_hms_opt(10, 0, 0)
        .unwrap()
}
