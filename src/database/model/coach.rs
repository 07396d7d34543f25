use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::database::schema::coach)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct Coach {
    id: i32,
    full_name: String,
    email: String,
    phone: Option<String>,
    specialization: Option<String>,
    is_available: bool,
}

impl From<Coach> for dto::coach::Coach {
    fn from(value: Coach) -> Self {
        dto::coach::Coach::new(
            value.id,
            value.full_name,
            value.email,
            value.phone,
            value.specialization,
            value.is_available,
        )
    }
}
