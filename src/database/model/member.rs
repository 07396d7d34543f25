use crate::database::error::DatabaseError;
use crate::database::model::parse_datetime;
use chrono::NaiveDate;
use diesel::prelude::*;
use dto::membership_type::MembershipType;
use std::str::FromStr;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::database::schema::member)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct Member {
    id: i32,
    full_name: String,
    email: String,
    phone: Option<String>,
    subscription_due_date: String,
    birthday: Option<String>,
    last_checkin_date: Option<String>,
    membership_type: String,
    is_active: bool,
    created_at: String,
}

impl TryFrom<Member> for dto::member::Member {
    type Error = DatabaseError;

    fn try_from(value: Member) -> Result<Self, Self::Error> {
        let subscription_due_date = NaiveDate::from_str(&value.subscription_due_date)?;
        let birthday = match value.birthday {
            Some(birthday) => Some(NaiveDate::from_str(&birthday)?),
            None => None,
        };
        let last_checkin_date = match value.last_checkin_date {
            Some(last_checkin_date) => Some(NaiveDate::from_str(&last_checkin_date)?),
            None => None,
        };
        let membership_type = MembershipType::from_str(&value.membership_type)
            .map_err(DatabaseError::InvalidStoredValue)?;
        let created_at = parse_datetime(&value.created_at)?;

        Ok(dto::member::Member::new(
            value.id,
            value.full_name,
            value.email,
            value.phone,
            subscription_due_date,
            birthday,
            last_checkin_date,
            membership_type,
            value.is_active,
            created_at,
        ))
    }
}
