use super::Result;
use crate::database::model::coach_schedule::CoachSchedule;
use diesel::prelude::*;
use dto::coach_schedule::NewCoachSchedule;

pub fn insert_schedule(
    connection: &mut SqliteConnection,
    target_coach_id: i32,
    new_schedule: &NewCoachSchedule,
) -> Result<dto::coach_schedule::CoachSchedule> {
    use crate::database::schema::coach_schedule::*;

    let result = diesel::insert_into(crate::database::schema::coach_schedule::table)
        .values((
            coach_id.eq(target_coach_id),
            day_of_week.eq(*new_schedule.day_of_week() as i32),
            start_time.eq(new_schedule.start_time().to_string()),
            end_time.eq(new_schedule.end_time().to_string()),
            is_available.eq(*new_schedule.is_available()),
            max_clients.eq(*new_schedule.max_clients() as i32),
        ))
        .returning(CoachSchedule::as_returning())
        .get_result(connection)?;

    dto::coach_schedule::CoachSchedule::try_from(result)
}

pub fn retrieve_for_coach(
    connection: &mut SqliteConnection,
    target_coach_id: i32,
) -> Result<Vec<dto::coach_schedule::CoachSchedule>> {
    use crate::database::schema::coach_schedule::*;

    let results = crate::database::schema::coach_schedule::dsl::coach_schedule
        .filter(coach_id.eq(target_coach_id))
        .order((day_of_week.asc(), start_time.asc()))
        .select(CoachSchedule::as_select())
        .load(connection)?;

    let schedules = {
        let mut schedules = Vec::new();
        for result in results {
            schedules.push(dto::coach_schedule::CoachSchedule::try_from(result)?);
        }

        schedules
    };

    Ok(schedules)
}

/// Only slots flagged available take part in capacity computations.
pub fn retrieve_available_for_day(
    connection: &mut SqliteConnection,
    target_coach_id: i32,
    day: u8,
) -> Result<Vec<dto::coach_schedule::CoachSchedule>> {
    use crate::database::schema::coach_schedule::*;

    let results = crate::database::schema::coach_schedule::dsl::coach_schedule
        .filter(coach_id.eq(target_coach_id))
        .filter(day_of_week.eq(day as i32))
        .filter(is_available.eq(true))
        .order(start_time.asc())
        .select(CoachSchedule::as_select())
        .load(connection)?;

    let schedules = {
        let mut schedules = Vec::new();
        for result in results {
            schedules.push(dto::coach_schedule::CoachSchedule::try_from(result)?);
        }

        schedules
    };

    Ok(schedules)
}
