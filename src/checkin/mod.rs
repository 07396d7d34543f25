use crate::checkin::error::CheckinError;
use crate::checkin::error::CheckinError::{AlreadyCheckedIn, NoActiveCheckin, UnknownMember};
use crate::database::dao;
use chrono::NaiveDateTime;
use diesel::SqliteConnection;
use dto::checkin::Checkin;

pub mod error;

type Result<T, E = CheckinError> = std::result::Result<T, E>;

/// Open a visit for the member. At most one check-in can be open per member
/// per calendar day; a second attempt the same day is a conflict.
/// Also stamps the member's `last_checkin_date`, which feeds the
/// inactivity-alert targeting.
pub fn check_in(
    connection: &mut SqliteConnection,
    member_id: i32,
    now: NaiveDateTime,
) -> Result<Checkin> {
    dao::member::find_member(connection, member_id)?.ok_or(UnknownMember(member_id))?;

    if dao::checkin::find_open_checkin_on_day(connection, member_id, now.date())?.is_some() {
        return Err(AlreadyCheckedIn);
    }

    let checkin = dao::checkin::insert_checkin(connection, member_id, now)?;
    dao::member::update_last_checkin_date(connection, member_id, now.date())?;

    Ok(checkin)
}

/// Close the member's latest open check-in. The open record itself decides
/// which visit is being closed: a check-in from 23:59 is still the one
/// matched at 00:01 the next day.
pub fn check_out(
    connection: &mut SqliteConnection,
    member_id: i32,
    now: NaiveDateTime,
) -> Result<Checkin> {
    let open = dao::checkin::find_latest_open_checkin(connection, member_id)?
        .ok_or(NoActiveCheckin)?;

    let duration = duration_minutes(*open.checkin_time(), now);
    let closed = dao::checkin::close_checkin(connection, *open.id(), now, duration)?;

    Ok(closed)
}

/// Whole minutes spent in the gym; seconds are truncated, not rounded.
fn duration_minutes(checkin_time: NaiveDateTime, checkout_time: NaiveDateTime) -> u32 {
    let seconds = (checkout_time - checkin_time).num_seconds().max(0);

    (seconds / 60) as u32
}

#[cfg(not(test))]
pub fn get_now() -> NaiveDateTime {
    chrono::offset::Utc::now().naive_utc()
}

#[cfg(test)]
pub fn get_now() -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2025, 6, 15)
        .expect("Should be great for testing")
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::dao::member::insert_member;
    use crate::database::dao::member::tests::{jane_doe, test_created_at};
    use crate::database::with_temp_database;
    use chrono::NaiveDate;

    fn time(day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, day)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    mod duration_minutes {
        use super::*;
        use parameterized::{ide, parameterized};

        ide!();

        #[parameterized(
            checkout = { (10, 45, 30), (10, 45, 59), (10, 0, 59), (9, 0, 0) },
            expected_minutes = { 45, 45, 0, 0 }
        )]
        fn should_floor_to_whole_minutes(checkout: (u32, u32, u32), expected_minutes: u32) {
            let (hour, minute, second) = checkout;
            let result = duration_minutes(time(1, 10, 0, 0), time(1, hour, minute, second));
            assert_eq!(expected_minutes, result);
        }
    }

    mod check_in {
        use super::*;

        #[test]
        fn success() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                let member =
                    insert_member(&mut connection, &jane_doe(), test_created_at()).unwrap();

                let checkin = check_in(&mut connection, *member.id(), time(15, 10, 0, 0)).unwrap();

                assert!(checkin.is_open());
                assert_eq!(&time(15, 10, 0, 0), checkin.checkin_time());

                let member = dao::member::find_member(&mut connection, *member.id())
                    .unwrap()
                    .unwrap();
                assert_eq!(
                    &Some(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()),
                    member.last_checkin_date()
                );
            })
        }

        #[test]
        fn fail_when_already_checked_in() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                let member =
                    insert_member(&mut connection, &jane_doe(), test_created_at()).unwrap();

                check_in(&mut connection, *member.id(), time(15, 10, 0, 0)).unwrap();
                let error =
                    check_in(&mut connection, *member.id(), time(15, 12, 0, 0)).unwrap_err();

                assert_eq!(AlreadyCheckedIn, error);
            })
        }

        #[test]
        fn success_on_next_day_after_forgotten_checkout() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                let member =
                    insert_member(&mut connection, &jane_doe(), test_created_at()).unwrap();

                check_in(&mut connection, *member.id(), time(14, 10, 0, 0)).unwrap();
                let checkin =
                    check_in(&mut connection, *member.id(), time(15, 10, 0, 0)).unwrap();

                assert!(checkin.is_open());
            })
        }

        #[test]
        fn fail_when_unknown_member() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();

                let error = check_in(&mut connection, 42, time(15, 10, 0, 0)).unwrap_err();

                assert_eq!(UnknownMember(42), error);
            })
        }
    }

    mod check_out {
        use super::*;

        #[test]
        fn success() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                let member =
                    insert_member(&mut connection, &jane_doe(), test_created_at()).unwrap();

                check_in(&mut connection, *member.id(), time(15, 10, 0, 0)).unwrap();
                let closed =
                    check_out(&mut connection, *member.id(), time(15, 10, 45, 30)).unwrap();

                assert!(!closed.is_open());
                assert_eq!(Some(45), *closed.duration_minutes());
            })
        }

        #[test]
        fn fail_without_open_checkin() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                let member =
                    insert_member(&mut connection, &jane_doe(), test_created_at()).unwrap();

                let error =
                    check_out(&mut connection, *member.id(), time(15, 10, 0, 0)).unwrap_err();

                assert_eq!(NoActiveCheckin, error);
            })
        }

        #[test]
        fn fail_on_second_checkout() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                let member =
                    insert_member(&mut connection, &jane_doe(), test_created_at()).unwrap();

                check_in(&mut connection, *member.id(), time(15, 10, 0, 0)).unwrap();
                check_out(&mut connection, *member.id(), time(15, 11, 0, 0)).unwrap();
                let error =
                    check_out(&mut connection, *member.id(), time(15, 12, 0, 0)).unwrap_err();

                assert_eq!(NoActiveCheckin, error);
            })
        }

        #[test]
        fn should_close_checkin_opened_the_previous_day() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                let member =
                    insert_member(&mut connection, &jane_doe(), test_created_at()).unwrap();

                check_in(&mut connection, *member.id(), time(14, 23, 59, 0)).unwrap();
                let closed =
                    check_out(&mut connection, *member.id(), time(15, 0, 1, 0)).unwrap();

                assert_eq!(&time(14, 23, 59, 0), closed.checkin_time());
                assert_eq!(Some(2), *closed.duration_minutes());
            })
        }
    }
}
