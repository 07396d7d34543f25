use super::Result;
use crate::database::model::format_datetime;
use crate::database::model::member_checkin::MemberCheckin;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use diesel::prelude::*;
use dto::checkin::Checkin;

pub fn insert_checkin(
    connection: &mut SqliteConnection,
    target_member_id: i32,
    time: NaiveDateTime,
) -> Result<Checkin> {
    use crate::database::schema::member_checkin::*;

    let result = diesel::insert_into(crate::database::schema::member_checkin::table)
        .values((
            member_id.eq(target_member_id),
            checkin_time.eq(format_datetime(&time)),
        ))
        .returning(MemberCheckin::as_returning())
        .get_result(connection)?;

    Checkin::try_from(result)
}

/// The open checkin a member created on the given calendar day, if any.
pub fn find_open_checkin_on_day(
    connection: &mut SqliteConnection,
    target_member_id: i32,
    day: NaiveDate,
) -> Result<Option<Checkin>> {
    use crate::database::schema::member_checkin::*;

    let day_start = day.and_time(NaiveTime::MIN);
    let next_day_start = day
        .succ_opt()
        .unwrap_or_else(|| panic!("Day after {day} should exist..."))
        .and_time(NaiveTime::MIN);

    let result = crate::database::schema::member_checkin::dsl::member_checkin
        .filter(member_id.eq(target_member_id))
        .filter(checkout_time.is_null())
        .filter(checkin_time.ge(format_datetime(&day_start)))
        .filter(checkin_time.lt(format_datetime(&next_day_start)))
        .order(checkin_time.desc())
        .select(MemberCheckin::as_select())
        .first(connection)
        .optional()?;

    match result {
        Some(result) => Ok(Some(Checkin::try_from(result)?)),
        None => Ok(None),
    }
}

/// The member's most recent open checkin, whatever day it was opened on.
pub fn find_latest_open_checkin(
    connection: &mut SqliteConnection,
    target_member_id: i32,
) -> Result<Option<Checkin>> {
    use crate::database::schema::member_checkin::*;

    let result = crate::database::schema::member_checkin::dsl::member_checkin
        .filter(member_id.eq(target_member_id))
        .filter(checkout_time.is_null())
        .order(checkin_time.desc())
        .select(MemberCheckin::as_select())
        .first(connection)
        .optional()?;

    match result {
        Some(result) => Ok(Some(Checkin::try_from(result)?)),
        None => Ok(None),
    }
}

pub fn close_checkin(
    connection: &mut SqliteConnection,
    checkin_id: i32,
    time: NaiveDateTime,
    duration: u32,
) -> Result<Checkin> {
    use crate::database::schema::member_checkin::*;

    let result = diesel::update(
        crate::database::schema::member_checkin::dsl::member_checkin.filter(id.eq(checkin_id)),
    )
    .set((
        checkout_time.eq(Some(format_datetime(&time))),
        duration_minutes.eq(Some(duration as i32)),
    ))
    .returning(MemberCheckin::as_returning())
    .get_result(connection)?;

    Checkin::try_from(result)
}
