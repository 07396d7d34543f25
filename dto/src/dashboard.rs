use crate::member::Member;
use crate::training_session::TrainingSession;
use crate::workout_log::WorkoutLog;
use crate::workout_plan::WorkoutPlan;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Body of a portal login request. The identity itself is assumed to have
/// been verified upstream; this only selects which member profile to bind
/// to the session.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct LoginRequest {
    email: String,
}

impl LoginRequest {
    pub fn new(email: String) -> Self {
        Self { email }
    }
}

/// Everything the member portal shows on its landing page:
/// the member's derived status plus their recent and upcoming activity.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct MemberDashboard {
    member: Member,
    days_until_due: i64,
    is_due_soon: bool,
    is_overdue: bool,
    current_workout_plan: Option<WorkoutPlan>,
    recent_workouts: Vec<WorkoutLog>,
    upcoming_sessions: Vec<TrainingSession>,
    workout_streak: u32,
    total_workouts: u32,
    this_month_workouts: u32,
}

impl MemberDashboard {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        member: Member,
        days_until_due: i64,
        is_due_soon: bool,
        is_overdue: bool,
        current_workout_plan: Option<WorkoutPlan>,
        recent_workouts: Vec<WorkoutLog>,
        upcoming_sessions: Vec<TrainingSession>,
        workout_streak: u32,
        total_workouts: u32,
        this_month_workouts: u32,
    ) -> Self {
        Self {
            member,
            days_until_due,
            is_due_soon,
            is_overdue,
            current_workout_plan,
            recent_workouts,
            upcoming_sessions,
            workout_streak,
            total_workouts,
            this_month_workouts,
        }
    }
}
