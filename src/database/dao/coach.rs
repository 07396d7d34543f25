use super::Result;
use crate::database::model::coach::Coach;
use diesel::prelude::*;
use dto::coach::NewCoach;

pub fn insert_coach(
    connection: &mut SqliteConnection,
    new_coach: &NewCoach,
) -> Result<dto::coach::Coach> {
    use crate::database::schema::coach::*;

    let result = diesel::insert_into(crate::database::schema::coach::table)
        .values((
            full_name.eq(new_coach.full_name()),
            email.eq(new_coach.email()),
            phone.eq(new_coach.phone().clone()),
            specialization.eq(new_coach.specialization().clone()),
            is_available.eq(*new_coach.is_available()),
        ))
        .returning(Coach::as_returning())
        .get_result(connection)?;

    Ok(dto::coach::Coach::from(result))
}

pub fn retrieve_coaches(connection: &mut SqliteConnection) -> Result<Vec<dto::coach::Coach>> {
    let results = crate::database::schema::coach::dsl::coach
        .order(crate::database::schema::coach::full_name.asc())
        .select(Coach::as_select())
        .load(connection)?;

    Ok(results.into_iter().map(dto::coach::Coach::from).collect())
}

pub fn find_coach(
    connection: &mut SqliteConnection,
    coach_id: i32,
) -> Result<Option<dto::coach::Coach>> {
    let result = crate::database::schema::coach::dsl::coach
        .filter(crate::database::schema::coach::id.eq(coach_id))
        .select(Coach::as_select())
        .first(connection)
        .optional()?;

    Ok(result.map(dto::coach::Coach::from))
}
