use crate::checkin as checkin_service;
use crate::checkin::error::CheckinError;
use crate::tools::log_error_and_return;
use crate::web::authentication::MemberSession;
use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::json;

#[post("/checkins/checkin")]
pub async fn checkin(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
    member_session: MemberSession,
) -> Result<(Status, String), Status> {
    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;

    match checkin_service::check_in(
        &mut connection,
        member_session.member_id(),
        checkin_service::get_now(),
    ) {
        Ok(checkin) => Ok((Status::Created, json!(checkin).to_string())),
        Err(CheckinError::AlreadyCheckedIn) => Err(Status::Conflict),
        Err(CheckinError::UnknownMember(_)) => Err(Status::NotFound),
        Err(error) => log_error_and_return(Err(Status::InternalServerError))(error),
    }
}

#[post("/checkins/checkout")]
pub async fn checkout(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
    member_session: MemberSession,
) -> Result<String, Status> {
    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;

    match checkin_service::check_out(
        &mut connection,
        member_session.member_id(),
        checkin_service::get_now(),
    ) {
        Ok(checkin) => Ok(json!(checkin).to_string()),
        Err(CheckinError::NoActiveCheckin) => Err(Status::Conflict),
        Err(error) => log_error_and_return(Err(Status::InternalServerError))(error),
    }
}

#[cfg(test)]
mod tests {
    use crate::database::dao;
    use crate::database::dao::member::tests::{jane_doe, test_created_at};
    use crate::database::with_temp_database;
    use crate::web::authentication::SESSION_COOKIE;
    use crate::web::session_storage::SessionStorage;
    use diesel::SqliteConnection;
    use diesel::r2d2::{ConnectionManager, Pool};
    use dto::checkin::Checkin;
    use rocket::http::{Cookie, Status};
    use rocket::local::asynchronous::Client;
    use rocket::tokio::runtime::Runtime;
    use std::sync::Mutex;

    fn initialize_member_session(member_id: i32) -> (String, Mutex<SessionStorage>) {
        let token = "e9af5e0f-c441-4bcd-bf22-31cc5b1f2f9e".to_owned();
        let mut storage = SessionStorage::default();
        storage.store(token.clone(), member_id);

        (token, Mutex::new(storage))
    }

    async fn client(
        pool: Pool<ConnectionManager<SqliteConnection>>,
        session_storage_mutex: Mutex<SessionStorage>,
    ) -> Client {
        let rocket = rocket::build()
            .manage(pool)
            .manage(session_storage_mutex)
            .mount("/", routes![super::checkin, super::checkout]);

        Client::tracked(rocket).await.unwrap()
    }

    #[test]
    fn should_cycle_through_checkin_and_checkout() {
        async fn test(pool: Pool<ConnectionManager<SqliteConnection>>) {
            let mut connection = pool.get().unwrap();
            let member =
                dao::member::insert_member(&mut connection, &jane_doe(), test_created_at())
                    .unwrap();
            let (token, storage) = initialize_member_session(*member.id());
            let client = client(pool, storage).await;

            let response = client
                .post("/checkins/checkin")
                .cookie(Cookie::new(SESSION_COOKIE, token.clone()))
                .dispatch()
                .await;
            assert_eq!(Status::Created, response.status());
            let checkin: Checkin = response.into_json().await.unwrap();
            assert!(checkin.is_open());

            // A second check-in the same day is a conflict.
            let response = client
                .post("/checkins/checkin")
                .cookie(Cookie::new(SESSION_COOKIE, token.clone()))
                .dispatch()
                .await;
            assert_eq!(Status::Conflict, response.status());

            let response = client
                .post("/checkins/checkout")
                .cookie(Cookie::new(SESSION_COOKIE, token.clone()))
                .dispatch()
                .await;
            assert_eq!(Status::Ok, response.status());
            let checkin: Checkin = response.into_json().await.unwrap();
            assert!(!checkin.is_open());
            assert_eq!(Some(0), *checkin.duration_minutes());

            // Nothing left to close.
            let response = client
                .post("/checkins/checkout")
                .cookie(Cookie::new(SESSION_COOKIE, token))
                .dispatch()
                .await;
            assert_eq!(Status::Conflict, response.status());
        }

        with_temp_database(|pool| Runtime::new().unwrap().block_on(test(pool)));
    }

    #[test]
    fn not_found_when_member_profile_vanished() {
        async fn test(pool: Pool<ConnectionManager<SqliteConnection>>) {
            let (token, storage) = initialize_member_session(42);
            let client = client(pool, storage).await;

            let response = client
                .post("/checkins/checkin")
                .cookie(Cookie::new(SESSION_COOKIE, token))
                .dispatch()
                .await;

            assert_eq!(Status::NotFound, response.status());
        }

        with_temp_database(|pool| Runtime::new().unwrap().block_on(test(pool)));
    }
}
