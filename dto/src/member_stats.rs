use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregate member counts served to the staff dashboard.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct MemberStats {
    total_members: u32,
    active_members: u32,
    inactive_members: u32,
    due_soon: u32,
    overdue: u32,
    birthdays_today: u32,
    new_this_month: u32,
    membership_types: HashMap<String, u32>,
}

impl MemberStats {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        total_members: u32,
        active_members: u32,
        inactive_members: u32,
        due_soon: u32,
        overdue: u32,
        birthdays_today: u32,
        new_this_month: u32,
        membership_types: HashMap<String, u32>,
    ) -> Self {
        Self {
            total_members,
            active_members,
            inactive_members,
            due_soon,
            overdue,
            birthdays_today,
            new_this_month,
            membership_types,
        }
    }
}
