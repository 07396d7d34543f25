use crate::database::dao;
use crate::database::error::DatabaseError;
use crate::member::stats::workout_streak;
use crate::member::status;
use chrono::{Datelike, NaiveDate};
use diesel::SqliteConnection;
use dto::dashboard::MemberDashboard;
use dto::member::Member;
use std::collections::HashSet;

const RECENT_WORKOUTS_LIMIT: usize = 10;
const UPCOMING_SESSIONS_LIMIT: i64 = 5;

/// Assemble the member-portal landing page: derived subscription status
/// plus the member's workout history and upcoming sessions.
pub fn build_dashboard(
    connection: &mut SqliteConnection,
    member: Member,
    today: NaiveDate,
) -> Result<MemberDashboard, DatabaseError> {
    let member_id = *member.id();

    let current_workout_plan = dao::workout::find_active_plan_for_member(connection, member_id)?;
    let logs = dao::workout::retrieve_logs_for_member(connection, member_id)?;
    let upcoming_sessions =
        dao::training_session::retrieve_upcoming_for_member(
            connection,
            member_id,
            today,
            UPCOMING_SESSIONS_LIMIT,
        )?;

    let completed_dates: HashSet<NaiveDate> = logs
        .iter()
        .filter(|log| *log.completed())
        .map(|log| *log.date())
        .collect();
    let total_workouts = logs.iter().filter(|log| *log.completed()).count() as u32;
    let this_month_workouts = logs
        .iter()
        .filter(|log| {
            *log.completed()
                && log.date().year() == today.year()
                && log.date().month() == today.month()
        })
        .count() as u32;
    let recent_workouts = logs.into_iter().take(RECENT_WORKOUTS_LIMIT).collect();

    let days_until_due = status::days_until_due(&member, today);
    let is_due_soon = status::is_due_soon(&member, today);
    let is_overdue = status::is_overdue(&member, today);
    let streak = workout_streak(&completed_dates, today);

    Ok(MemberDashboard::new(
        member,
        days_until_due,
        is_due_soon,
        is_overdue,
        current_workout_plan,
        recent_workouts,
        upcoming_sessions,
        streak,
        total_workouts,
        this_month_workouts,
    ))
}
