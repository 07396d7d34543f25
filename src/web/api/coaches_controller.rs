use crate::coach::availability::compute_availability;
use crate::database::dao;
use crate::database::error::DatabaseError;
use crate::tools::log_error_and_return;
use crate::web::api::get_now;
use chrono::NaiveDate;
use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use dto::coach::NewCoach;
use dto::coach_schedule::NewCoachSchedule;
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::{Json, json};
use std::str::FromStr;

#[get("/coaches")]
pub async fn list_coaches(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
) -> Result<String, Status> {
    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    let coaches = dao::coach::retrieve_coaches(&mut connection)
        .map_err(log_error_and_return(Status::InternalServerError))?;

    Ok(json!(coaches).to_string())
}

#[post("/coaches", format = "application/json", data = "<new_coach>")]
pub async fn create_coach(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
    new_coach: Json<NewCoach>,
) -> Result<(Status, String), Status> {
    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;

    match dao::coach::insert_coach(&mut connection, &new_coach.into_inner()) {
        Ok(coach) => Ok((Status::Created, json!(coach).to_string())),
        Err(DatabaseError::Duplicate) => Err(Status::Conflict),
        Err(error) => log_error_and_return(Err(Status::InternalServerError))(error),
    }
}

#[get("/coaches/<coach_id>/schedule")]
pub async fn coach_schedule(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
    coach_id: i32,
) -> Result<String, Status> {
    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    dao::coach::find_coach(&mut connection, coach_id)
        .map_err(log_error_and_return(Status::InternalServerError))?
        .ok_or(Status::NotFound)?;

    let schedules = dao::coach_schedule::retrieve_for_coach(&mut connection, coach_id)
        .map_err(log_error_and_return(Status::InternalServerError))?;

    Ok(json!(schedules).to_string())
}

#[post(
    "/coaches/<coach_id>/schedule",
    format = "application/json",
    data = "<new_schedule>"
)]
pub async fn add_coach_schedule(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
    coach_id: i32,
    new_schedule: Json<NewCoachSchedule>,
) -> Result<(Status, String), Status> {
    let new_schedule = new_schedule.into_inner();
    if *new_schedule.day_of_week() > 6 || new_schedule.start_time() >= new_schedule.end_time() {
        return Err(Status::BadRequest);
    }

    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    dao::coach::find_coach(&mut connection, coach_id)
        .map_err(log_error_and_return(Status::InternalServerError))?
        .ok_or(Status::NotFound)?;

    match dao::coach_schedule::insert_schedule(&mut connection, coach_id, &new_schedule) {
        Ok(schedule) => Ok((Status::Created, json!(schedule).to_string())),
        Err(DatabaseError::Duplicate) => Err(Status::Conflict),
        Err(error) => log_error_and_return(Err(Status::InternalServerError))(error),
    }
}

/// Remaining capacity per schedule slot for the given date
/// (today when no date is passed).
#[get("/coaches/<coach_id>/availability?<date>")]
pub async fn coach_availability(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
    coach_id: i32,
    date: Option<String>,
) -> Result<String, Status> {
    let date = match date {
        Some(date) => NaiveDate::from_str(&date).map_err(log_error_and_return(Status::BadRequest))?,
        None => get_now().date(),
    };

    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    dao::coach::find_coach(&mut connection, coach_id)
        .map_err(log_error_and_return(Status::InternalServerError))?
        .ok_or(Status::NotFound)?;

    let availability = compute_availability(&mut connection, coach_id, date)
        .map_err(log_error_and_return(Status::InternalServerError))?;

    Ok(json!(availability).to_string())
}
