use crate::database::error::DatabaseError;
use crate::database::model::parse_datetime;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::database::schema::member_checkin)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct MemberCheckin {
    id: i32,
    member_id: i32,
    checkin_time: String,
    checkout_time: Option<String>,
    duration_minutes: Option<i32>,
}

impl TryFrom<MemberCheckin> for dto::checkin::Checkin {
    type Error = DatabaseError;

    fn try_from(value: MemberCheckin) -> Result<Self, Self::Error> {
        let checkin_time = parse_datetime(&value.checkin_time)?;
        let checkout_time = match value.checkout_time {
            Some(checkout_time) => Some(parse_datetime(&checkout_time)?),
            None => None,
        };

        Ok(dto::checkin::Checkin::new(
            value.id,
            value.member_id,
            checkin_time,
            checkout_time,
            value.duration_minutes.map(|duration| duration as u32),
        ))
    }
}
