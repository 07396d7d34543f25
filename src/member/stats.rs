use crate::database::dao;
use crate::database::error::DatabaseError;
use crate::member::status;
use chrono::{Datelike, NaiveDate};
use diesel::SqliteConnection;
use dto::member_stats::MemberStats;
use std::collections::{HashMap, HashSet};

type Result<T, E = DatabaseError> = std::result::Result<T, E>;

pub fn compute_member_stats(
    connection: &mut SqliteConnection,
    today: NaiveDate,
) -> Result<MemberStats> {
    let members = dao::member::retrieve_members(connection)?;

    let total_members = members.len() as u32;
    let active_members = members.iter().filter(|member| *member.is_active()).count() as u32;
    let inactive_members = total_members - active_members;

    let due_soon = members
        .iter()
        .filter(|member| *member.is_active() && status::is_due_soon(member, today))
        .count() as u32;
    let overdue = members
        .iter()
        .filter(|member| *member.is_active() && status::is_overdue(member, today))
        .count() as u32;
    let birthdays_today = members
        .iter()
        .filter(|member| *member.is_active() && status::is_birthday_today(member, today))
        .count() as u32;

    let month_start = today
        .with_day(1)
        .unwrap_or_else(|| panic!("First day of {today}'s month should exist..."));
    let new_this_month = members
        .iter()
        .filter(|member| member.created_at().date() >= month_start)
        .count() as u32;

    let mut membership_types: HashMap<String, u32> = HashMap::new();
    for member in &members {
        *membership_types
            .entry(member.membership_type().to_string())
            .or_insert(0) += 1;
    }

    Ok(MemberStats::new(
        total_members,
        active_members,
        inactive_members,
        due_soon,
        overdue,
        birthdays_today,
        new_this_month,
        membership_types,
    ))
}

/// Consecutive days with a completed workout, counting back from `today`.
/// The streak breaks on the first day without one, so a rest day yesterday
/// means a streak of zero even with months of history behind it.
pub fn workout_streak(completed_dates: &HashSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut current = today;
    while completed_dates.contains(&current) {
        streak += 1;
        match current.pred_opt() {
            Some(previous) => current = previous,
            None => break,
        }
    }

    streak
}
