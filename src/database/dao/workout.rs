use super::Result;
use crate::database::model::workout::{WorkoutLog, WorkoutPlan};
use diesel::prelude::*;
use dto::workout_log::NewWorkoutLog;
use dto::workout_plan::{AssignWorkoutPlan, NewWorkoutPlan};

pub fn insert_plan(
    connection: &mut SqliteConnection,
    new_plan: &NewWorkoutPlan,
) -> Result<dto::workout_plan::WorkoutPlan> {
    use crate::database::schema::workout_plan::*;

    let result = diesel::insert_into(crate::database::schema::workout_plan::table)
        .values((
            name.eq(new_plan.name()),
            description.eq(new_plan.description()),
            difficulty_level.eq(new_plan.difficulty_level().to_string()),
            duration_weeks.eq(*new_plan.duration_weeks() as i32),
            sessions_per_week.eq(*new_plan.sessions_per_week() as i32),
            coach_id.eq(new_plan.coach_id()),
            is_public.eq(*new_plan.is_public()),
        ))
        .returning(WorkoutPlan::as_returning())
        .get_result(connection)?;

    dto::workout_plan::WorkoutPlan::try_from(result)
}

pub fn retrieve_plans(
    connection: &mut SqliteConnection,
) -> Result<Vec<dto::workout_plan::WorkoutPlan>> {
    let results = crate::database::schema::workout_plan::dsl::workout_plan
        .order(crate::database::schema::workout_plan::name.asc())
        .select(WorkoutPlan::as_select())
        .load(connection)?;

    let plans = {
        let mut plans = Vec::new();
        for result in results {
            plans.push(dto::workout_plan::WorkoutPlan::try_from(result)?);
        }

        plans
    };

    Ok(plans)
}

pub fn find_plan(
    connection: &mut SqliteConnection,
    plan_id: i32,
) -> Result<Option<dto::workout_plan::WorkoutPlan>> {
    let result = crate::database::schema::workout_plan::dsl::workout_plan
        .filter(crate::database::schema::workout_plan::id.eq(plan_id))
        .select(WorkoutPlan::as_select())
        .first(connection)
        .optional()?;

    match result {
        Some(result) => Ok(Some(dto::workout_plan::WorkoutPlan::try_from(result)?)),
        None => Ok(None),
    }
}

/// Put a member on a plan. Any previous assignment is deactivated so the
/// dashboard always shows a single current plan.
pub fn assign_plan(
    connection: &mut SqliteConnection,
    plan_id: i32,
    assignment: &AssignWorkoutPlan,
) -> Result<usize> {
    use crate::database::schema::member_workout_plan::*;

    diesel::update(
        crate::database::schema::member_workout_plan::dsl::member_workout_plan
            .filter(member_id.eq(assignment.member_id())),
    )
    .set(is_active.eq(false))
    .execute(connection)?;

    let count = diesel::insert_into(crate::database::schema::member_workout_plan::table)
        .values((
            member_id.eq(assignment.member_id()),
            workout_plan_id.eq(plan_id),
            start_date.eq(assignment.start_date().to_string()),
            end_date.eq(assignment.end_date().to_string()),
            is_active.eq(true),
        ))
        .execute(connection)?;

    Ok(count)
}

pub fn find_active_plan_for_member(
    connection: &mut SqliteConnection,
    target_member_id: i32,
) -> Result<Option<dto::workout_plan::WorkoutPlan>> {
    use crate::database::schema::member_workout_plan;
    use crate::database::schema::workout_plan;

    let result = member_workout_plan::dsl::member_workout_plan
        .inner_join(workout_plan::table)
        .filter(member_workout_plan::member_id.eq(target_member_id))
        .filter(member_workout_plan::is_active.eq(true))
        .order(member_workout_plan::id.desc())
        .select(WorkoutPlan::as_select())
        .first(connection)
        .optional()?;

    match result {
        Some(result) => Ok(Some(dto::workout_plan::WorkoutPlan::try_from(result)?)),
        None => Ok(None),
    }
}

pub fn insert_log(
    connection: &mut SqliteConnection,
    new_log: &NewWorkoutLog,
) -> Result<dto::workout_log::WorkoutLog> {
    use crate::database::schema::workout_log::*;

    let result = diesel::insert_into(crate::database::schema::workout_log::table)
        .values((
            member_id.eq(new_log.member_id()),
            date.eq(new_log.date().to_string()),
            duration_minutes.eq(*new_log.duration_minutes() as i32),
            notes.eq(new_log.notes().clone()),
            completed.eq(*new_log.completed()),
        ))
        .returning(WorkoutLog::as_returning())
        .get_result(connection)?;

    dto::workout_log::WorkoutLog::try_from(result)
}

pub fn retrieve_logs_for_member(
    connection: &mut SqliteConnection,
    target_member_id: i32,
) -> Result<Vec<dto::workout_log::WorkoutLog>> {
    use crate::database::schema::workout_log::*;

    let results = crate::database::schema::workout_log::dsl::workout_log
        .filter(member_id.eq(target_member_id))
        .order(date.desc())
        .select(WorkoutLog::as_select())
        .load(connection)?;

    let logs = {
        let mut logs = Vec::new();
        for result in results {
            logs.push(dto::workout_log::WorkoutLog::try_from(result)?);
        }

        logs
    };

    Ok(logs)
}
