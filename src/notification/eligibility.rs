use crate::database::dao;
use crate::error::Result;
use crate::member::status;
use crate::notification::error::NotificationError;
use crate::notification::error::NotificationError::InvalidKind;
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use diesel::SqliteConnection;
use dto::email_kind::EmailKind;
use dto::member::Member;

/// How long after a successful send a member stays excluded from the
/// next dispatch of the same kind.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Cooldown {
    Days(u64),
    SameCalendarDay,
}

impl Cooldown {
    /// First instant from which an earlier send still counts as recent.
    /// Windows are aligned on midnight, so "1 day" means "since the start
    /// of yesterday", not "in the last 24 hours".
    pub fn start(&self, today: NaiveDate) -> NaiveDateTime {
        let start_day = match self {
            Cooldown::Days(days) => today
                .checked_sub_days(Days::new(*days))
                .unwrap_or_else(|| panic!("Date {days} days before {today} should exist...")),
            Cooldown::SameCalendarDay => today,
        };

        start_day.and_time(NaiveTime::MIN)
    }
}

/// How one kind of email picks its audience and throttles repeats.
pub struct DispatchRule {
    pub is_target: fn(&Member, NaiveDate) -> bool,
    pub cooldown: Cooldown,
}

impl DispatchRule {
    /// The reminder kinds are recorded in the log by other flows but can't
    /// be dispatched here; asking for them is a caller error.
    pub fn for_kind(kind: &EmailKind) -> Result<DispatchRule, NotificationError> {
        match kind {
            EmailKind::Subscription => Ok(DispatchRule {
                is_target: status::is_due_soon,
                cooldown: Cooldown::Days(1),
            }),
            EmailKind::Motivational => Ok(DispatchRule {
                is_target: |_, _| true,
                cooldown: Cooldown::Days(7),
            }),
            EmailKind::Birthday => Ok(DispatchRule {
                is_target: status::is_birthday_today,
                cooldown: Cooldown::SameCalendarDay,
            }),
            EmailKind::Inactivity => Ok(DispatchRule {
                is_target: status::is_inactive,
                cooldown: Cooldown::Days(7),
            }),
            EmailKind::WorkoutReminder | EmailKind::SessionReminder => Err(InvalidKind(*kind)),
        }
    }
}

/// Members who should receive a `kind` email now: active members matching
/// the kind's targeting rule, minus anyone already served within the
/// cooldown window (unless `force_send` bypasses it), intersected with the
/// explicit id filter when one is given.
///
/// The cooldown check reads the log before the dispatcher appends to it, so
/// two concurrent runs can both pass it. The append-only log makes that
/// race benign: it costs a duplicate email, never a lost record.
pub fn select_eligible(
    connection: &mut SqliteConnection,
    kind: &EmailKind,
    today: NaiveDate,
    member_ids: Option<&[i32]>,
    force_send: bool,
) -> Result<Vec<Member>> {
    let rule = DispatchRule::for_kind(kind)?;

    let members = dao::member::retrieve_active_members(connection)?;
    let candidates = members
        .into_iter()
        .filter(|member| (rule.is_target)(member, today))
        .filter(|member| member_ids.is_none_or(|ids| ids.contains(member.id())))
        .collect::<Vec<_>>();

    if force_send {
        return Ok(candidates);
    }

    let since = rule.cooldown.start(today);
    let mut eligible = Vec::new();
    for member in candidates {
        if dao::email_log::has_sent_entry_since(connection, *member.id(), kind, since)? {
            info!("Skipping {} - {kind} email already sent recently", member.email());
        } else {
            eligible.push(member);
        }
    }

    Ok(eligible)
}
