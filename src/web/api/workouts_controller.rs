use crate::database::dao;
use crate::tools::log_error_and_return;
use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use dto::workout_log::NewWorkoutLog;
use dto::workout_plan::{AssignWorkoutPlan, NewWorkoutPlan};
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::{Json, json};

#[get("/workout-plans")]
pub async fn list_workout_plans(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
) -> Result<String, Status> {
    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    let plans = dao::workout::retrieve_plans(&mut connection)
        .map_err(log_error_and_return(Status::InternalServerError))?;

    Ok(json!(plans).to_string())
}

#[post("/workout-plans", format = "application/json", data = "<new_plan>")]
pub async fn create_workout_plan(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
    new_plan: Json<NewWorkoutPlan>,
) -> Result<(Status, String), Status> {
    let new_plan = new_plan.into_inner();

    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    dao::coach::find_coach(&mut connection, *new_plan.coach_id())
        .map_err(log_error_and_return(Status::InternalServerError))?
        .ok_or(Status::NotFound)?;

    let plan = dao::workout::insert_plan(&mut connection, &new_plan)
        .map_err(log_error_and_return(Status::InternalServerError))?;

    Ok((Status::Created, json!(plan).to_string()))
}

#[post(
    "/workout-plans/<plan_id>/assign",
    format = "application/json",
    data = "<assignment>"
)]
pub async fn assign_workout_plan(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
    plan_id: i32,
    assignment: Json<AssignWorkoutPlan>,
) -> Result<Status, Status> {
    let assignment = assignment.into_inner();
    if assignment.start_date() > assignment.end_date() {
        return Err(Status::BadRequest);
    }

    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    dao::workout::find_plan(&mut connection, plan_id)
        .map_err(log_error_and_return(Status::InternalServerError))?
        .ok_or(Status::NotFound)?;
    dao::member::find_member(&mut connection, *assignment.member_id())
        .map_err(log_error_and_return(Status::InternalServerError))?
        .ok_or(Status::NotFound)?;

    dao::workout::assign_plan(&mut connection, plan_id, &assignment)
        .map_err(log_error_and_return(Status::InternalServerError))?;

    Ok(Status::NoContent)
}

#[post("/workout-logs", format = "application/json", data = "<new_log>")]
pub async fn log_workout(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
    new_log: Json<NewWorkoutLog>,
) -> Result<(Status, String), Status> {
    let new_log = new_log.into_inner();

    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    dao::member::find_member(&mut connection, *new_log.member_id())
        .map_err(log_error_and_return(Status::InternalServerError))?
        .ok_or(Status::NotFound)?;

    let log = dao::workout::insert_log(&mut connection, &new_log)
        .map_err(log_error_and_return(Status::InternalServerError))?;

    Ok((Status::Created, json!(log).to_string()))
}

#[get("/workout-logs?<member_id>")]
pub async fn list_workout_logs(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
    member_id: i32,
) -> Result<String, Status> {
    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    let logs = dao::workout::retrieve_logs_for_member(&mut connection, member_id)
        .map_err(log_error_and_return(Status::InternalServerError))?;

    Ok(json!(logs).to_string())
}

#[cfg(test)]
mod tests {
    use crate::database::dao;
    use crate::database::dao::coach::tests::sam_trainer;
    use crate::database::dao::member::tests::{jane_doe, test_created_at};
    use crate::database::dao::workout::tests::starter_plan;
    use crate::database::with_temp_database;
    use chrono::NaiveDate;
    use diesel::SqliteConnection;
    use diesel::r2d2::{ConnectionManager, Pool};
    use dto::workout_plan::AssignWorkoutPlan;
    use rocket::http::hyper::header::CONTENT_TYPE;
    use rocket::http::{ContentType, Header, Status};
    use rocket::local::asynchronous::Client;
    use rocket::serde::json::json;
    use rocket::tokio::runtime::Runtime;

    async fn client(pool: Pool<ConnectionManager<SqliteConnection>>) -> Client {
        let rocket = rocket::build().manage(pool).mount(
            "/",
            routes![
                super::list_workout_plans,
                super::create_workout_plan,
                super::assign_workout_plan,
                super::log_workout,
                super::list_workout_logs,
            ],
        );

        Client::tracked(rocket).await.unwrap()
    }

    mod assign_workout_plan {
        use super::*;

        #[test]
        fn success() {
            async fn test(pool: Pool<ConnectionManager<SqliteConnection>>) {
                let mut connection = pool.get().unwrap();
                let coach = dao::coach::insert_coach(&mut connection, &sam_trainer()).unwrap();
                let plan =
                    dao::workout::insert_plan(&mut connection, &starter_plan(*coach.id()))
                        .unwrap();
                let member =
                    dao::member::insert_member(&mut connection, &jane_doe(), test_created_at())
                        .unwrap();
                let client = client(pool).await;

                let assignment = AssignWorkoutPlan::new(
                    *member.id(),
                    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                    NaiveDate::from_ymd_opt(2025, 7, 27).unwrap(),
                );
                let response = client
                    .post(format!("/workout-plans/{}/assign", plan.id()))
                    .body(json!(assignment).to_string().as_bytes())
                    .header(Header::new(
                        CONTENT_TYPE.to_string(),
                        ContentType::JSON.to_string(),
                    ))
                    .dispatch()
                    .await;

                assert_eq!(Status::NoContent, response.status());
                let active =
                    dao::workout::find_active_plan_for_member(&mut connection, *member.id())
                        .unwrap();
                assert_eq!(Some(plan), active);
            }

            with_temp_database(|pool| Runtime::new().unwrap().block_on(test(pool)));
        }

        #[test]
        fn bad_request_when_dates_reversed() {
            async fn test(pool: Pool<ConnectionManager<SqliteConnection>>) {
                let mut connection = pool.get().unwrap();
                let coach = dao::coach::insert_coach(&mut connection, &sam_trainer()).unwrap();
                let plan =
                    dao::workout::insert_plan(&mut connection, &starter_plan(*coach.id()))
                        .unwrap();
                let member =
                    dao::member::insert_member(&mut connection, &jane_doe(), test_created_at())
                        .unwrap();
                let client = client(pool).await;

                let assignment = AssignWorkoutPlan::new(
                    *member.id(),
                    NaiveDate::from_ymd_opt(2025, 7, 27).unwrap(),
                    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                );
                let response = client
                    .post(format!("/workout-plans/{}/assign", plan.id()))
                    .body(json!(assignment).to_string().as_bytes())
                    .header(Header::new(
                        CONTENT_TYPE.to_string(),
                        ContentType::JSON.to_string(),
                    ))
                    .dispatch()
                    .await;

                assert_eq!(Status::BadRequest, response.status());
            }

            with_temp_database(|pool| Runtime::new().unwrap().block_on(test(pool)));
        }
    }
}
