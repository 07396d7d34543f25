use crate::database::dao;
use crate::database::error::DatabaseError;
use chrono::{Datelike, NaiveDate, NaiveTime};
use diesel::SqliteConnection;
use dto::coach_schedule::CoachSchedule;
use dto::slot_availability::SlotAvailability;
use dto::training_session::TrainingSession;

/// Half-open intervals `[a_start, a_end)` and `[b_start, b_end)` overlap
/// iff each one starts before the other ends.
pub fn overlaps(
    a_start: NaiveTime,
    a_end: NaiveTime,
    b_start: NaiveTime,
    b_end: NaiveTime,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Remaining capacity of one schedule slot, given the day's booked sessions.
/// Every overlapping session takes one slot; the result never goes negative.
pub fn available_slots(schedule: &CoachSchedule, booked_sessions: &[TrainingSession]) -> u32 {
    let conflicting = booked_sessions
        .iter()
        .filter(|session| {
            overlaps(
                *schedule.start_time(),
                *schedule.end_time(),
                *session.start_time(),
                *session.end_time(),
            )
        })
        .count() as u32;

    schedule.max_clients().saturating_sub(conflicting)
}

/// Monday=0 through Sunday=6.
pub fn day_of_week(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_monday() as u8
}

/// Per-slot remaining capacity for a coach on a given date.
pub fn compute_availability(
    connection: &mut SqliteConnection,
    coach_id: i32,
    date: NaiveDate,
) -> Result<Vec<SlotAvailability>, DatabaseError> {
    let schedules =
        dao::coach_schedule::retrieve_available_for_day(connection, coach_id, day_of_week(date))?;
    let booked_sessions =
        dao::training_session::retrieve_occupying_for_coach_on_date(connection, coach_id, date)?;

    Ok(schedules
        .iter()
        .map(|schedule| {
            SlotAvailability::new(
                *schedule.id(),
                *schedule.start_time(),
                *schedule.end_time(),
                available_slots(schedule, &booked_sessions),
                *schedule.max_clients(),
            )
        })
        .collect())
}
