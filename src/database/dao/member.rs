use super::Result;
use crate::database::model::format_datetime;
use crate::database::model::member::Member;
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use dto::member::NewMember;

pub fn insert_member(
    connection: &mut SqliteConnection,
    new_member: &NewMember,
    creation_time: NaiveDateTime,
) -> Result<dto::member::Member> {
    use crate::database::schema::member::*;

    let result = diesel::insert_into(crate::database::schema::member::table)
        .values((
            full_name.eq(new_member.full_name()),
            email.eq(new_member.email()),
            phone.eq(new_member.phone().clone()),
            subscription_due_date.eq(new_member.subscription_due_date().to_string()),
            birthday.eq(new_member.birthday().map(|b| b.to_string())),
            last_checkin_date.eq(new_member.last_checkin_date().map(|d| d.to_string())),
            membership_type.eq(new_member.membership_type().to_string()),
            is_active.eq(*new_member.is_active()),
            created_at.eq(format_datetime(&creation_time)),
        ))
        .returning(Member::as_returning())
        .get_result(connection)?;

    dto::member::Member::try_from(result)
}

pub fn retrieve_members(connection: &mut SqliteConnection) -> Result<Vec<dto::member::Member>> {
    let results = crate::database::schema::member::dsl::member
        .order(crate::database::schema::member::created_at.desc())
        .select(Member::as_select())
        .load(connection)?;

    let members = {
        let mut members = Vec::new();
        for result in results {
            members.push(dto::member::Member::try_from(result)?);
        }

        members
    };

    Ok(members)
}

pub fn retrieve_active_members(
    connection: &mut SqliteConnection,
) -> Result<Vec<dto::member::Member>> {
    let results = crate::database::schema::member::dsl::member
        .filter(crate::database::schema::member::is_active.eq(true))
        .select(Member::as_select())
        .load(connection)?;

    let members = {
        let mut members = Vec::new();
        for result in results {
            members.push(dto::member::Member::try_from(result)?);
        }

        members
    };

    Ok(members)
}

pub fn find_member(
    connection: &mut SqliteConnection,
    member_id: i32,
) -> Result<Option<dto::member::Member>> {
    let result = crate::database::schema::member::dsl::member
        .filter(crate::database::schema::member::id.eq(member_id))
        .select(Member::as_select())
        .first(connection)
        .optional()?;

    match result {
        Some(result) => Ok(Some(dto::member::Member::try_from(result)?)),
        None => Ok(None),
    }
}

pub fn find_member_by_email(
    connection: &mut SqliteConnection,
    member_email: &str,
) -> Result<Option<dto::member::Member>> {
    let result = crate::database::schema::member::dsl::member
        .filter(crate::database::schema::member::email.eq(member_email))
        .select(Member::as_select())
        .first(connection)
        .optional()?;

    match result {
        Some(result) => Ok(Some(dto::member::Member::try_from(result)?)),
        None => Ok(None),
    }
}

pub fn update_member(
    connection: &mut SqliteConnection,
    member_id: i32,
    new_member: &NewMember,
) -> Result<usize> {
    use crate::database::schema::member::*;

    let count = diesel::update(
        crate::database::schema::member::dsl::member.filter(id.eq(member_id)),
    )
    .set((
        full_name.eq(new_member.full_name()),
        email.eq(new_member.email()),
        phone.eq(new_member.phone().clone()),
        subscription_due_date.eq(new_member.subscription_due_date().to_string()),
        birthday.eq(new_member.birthday().map(|b| b.to_string())),
        last_checkin_date.eq(new_member.last_checkin_date().map(|d| d.to_string())),
        membership_type.eq(new_member.membership_type().to_string()),
        is_active.eq(*new_member.is_active()),
    ))
    .execute(connection)?;

    Ok(count)
}

/// Members are never hard-deleted; deactivation keeps their history around.
pub fn deactivate_member(connection: &mut SqliteConnection, member_id: i32) -> Result<usize> {
    use crate::database::schema::member::*;

    let count = diesel::update(
        crate::database::schema::member::dsl::member.filter(id.eq(member_id)),
    )
    .set(is_active.eq(false))
    .execute(connection)?;

    Ok(count)
}

pub fn update_last_checkin_date(
    connection: &mut SqliteConnection,
    member_id: i32,
    date: NaiveDate,
) -> Result<usize> {
    use crate::database::schema::member::*;

    let count = diesel::update(
        crate::database::schema::member::dsl::member.filter(id.eq(member_id)),
    )
    .set(last_checkin_date.eq(Some(date.to_string())))
    .execute(connection)?;

    Ok(count)
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::database::with_temp_database;
    use chrono::NaiveDate;
    use dto::membership_type::MembershipType;

    pub fn jane_doe() -> NewMember {
        NewMember::new(
            "Jane Doe".to_string(),
            "jane.doe@email.com".to_string(),
            Some("+1 555 0100".to_string()),
            NaiveDate::from_ymd_opt(2025, 6, 18).unwrap(),
            Some(NaiveDate::from_ymd_opt(1990, 6, 15).unwrap()),
            Some(NaiveDate::from_ymd_opt(2025, 6, 14).unwrap()),
            MembershipType::Premium,
            true,
        )
    }

    pub fn jon_smith() -> NewMember {
        NewMember::new(
            "Jon Smith".to_string(),
            "jon.smith@email.com".to_string(),
            None,
            NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
            None,
            None,
            MembershipType::Basic,
            true,
        )
    }

    pub fn test_created_at() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    mod insert_member {
        use super::super::*;
        use super::{jane_doe, test_created_at};
        use crate::database::with_temp_database;

        #[test]
        fn success() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();

                let member = insert_member(&mut connection, &jane_doe(), test_created_at()).unwrap();

                assert_eq!(jane_doe().email(), member.email());
                assert_eq!(jane_doe().subscription_due_date(), member.subscription_due_date());
                assert!(*member.is_active());
            })
        }

        #[test]
        fn fail_when_duplicate_email() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();

                insert_member(&mut connection, &jane_doe(), test_created_at()).unwrap();
                let error =
                    insert_member(&mut connection, &jane_doe(), test_created_at()).unwrap_err();

                assert_eq!(crate::database::error::DatabaseError::Duplicate, error);
            })
        }
    }

    mod retrieve_members {
        use super::super::*;
        use super::{jane_doe, jon_smith, test_created_at};
        use crate::database::with_temp_database;

        #[test]
        fn success() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();

                insert_member(&mut connection, &jane_doe(), test_created_at()).unwrap();
                insert_member(&mut connection, &jon_smith(), test_created_at()).unwrap();

                let members = retrieve_members(&mut connection).unwrap();
                assert_eq!(2, members.len());
            })
        }

        #[test]
        fn success_when_empty() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();

                let members = retrieve_members(&mut connection).unwrap();
                assert!(members.is_empty());
            })
        }
    }

    mod retrieve_active_members {
        use super::super::*;
        use super::{jane_doe, jon_smith, test_created_at};
        use crate::database::with_temp_database;

        #[test]
        fn should_skip_deactivated_members() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();

                let jane = insert_member(&mut connection, &jane_doe(), test_created_at()).unwrap();
                insert_member(&mut connection, &jon_smith(), test_created_at()).unwrap();
                deactivate_member(&mut connection, *jane.id()).unwrap();

                let members = retrieve_active_members(&mut connection).unwrap();
                assert_eq!(1, members.len());
                assert_eq!(jon_smith().email(), members[0].email());
            })
        }
    }

    mod update_last_checkin_date {
        use super::super::*;
        use super::{jon_smith, test_created_at};
        use crate::database::with_temp_database;

        #[test]
        fn success() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();

                let member =
                    insert_member(&mut connection, &jon_smith(), test_created_at()).unwrap();
                let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

                let count =
                    update_last_checkin_date(&mut connection, *member.id(), date).unwrap();
                assert_eq!(1, count);

                let member = find_member(&mut connection, *member.id()).unwrap().unwrap();
                assert_eq!(&Some(date), member.last_checkin_date());
            })
        }
    }
}
