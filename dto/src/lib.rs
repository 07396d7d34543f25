pub mod checkin;
pub mod coach;
pub mod coach_schedule;
pub mod csv_member;
pub mod dashboard;
pub mod email_kind;
pub mod email_log_entry;
pub mod member;
pub mod member_stats;
pub mod membership_type;
pub mod send_email;
pub mod session_status;
pub mod slot_availability;
pub mod training_session;
pub mod workout_log;
pub mod workout_plan;
