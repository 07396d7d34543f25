use crate::database::dao;
use crate::session;
use crate::session::error::SessionError;
use crate::tools::log_error_and_return;
use crate::web::authentication::MemberSession;
use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use dto::training_session::NewTrainingSession;
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::{Json, json};

#[get("/sessions")]
pub async fn list_sessions(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
) -> Result<String, Status> {
    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    let sessions = dao::training_session::retrieve_sessions(&mut connection)
        .map_err(log_error_and_return(Status::InternalServerError))?;

    Ok(json!(sessions).to_string())
}

#[post("/sessions", format = "application/json", data = "<new_session>")]
pub async fn create_session(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
    new_session: Json<NewTrainingSession>,
) -> Result<(Status, String), Status> {
    let new_session = new_session.into_inner();
    if new_session.start_time() >= new_session.end_time() {
        return Err(Status::BadRequest);
    }

    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    dao::coach::find_coach(&mut connection, *new_session.coach_id())
        .map_err(log_error_and_return(Status::InternalServerError))?
        .ok_or(Status::NotFound)?;

    let session = dao::training_session::insert_session(&mut connection, &new_session)
        .map_err(log_error_and_return(Status::InternalServerError))?;

    Ok((Status::Created, json!(session).to_string()))
}

/// The authenticated member books themselves into the session.
#[post("/sessions/<session_id>/join")]
pub async fn join_session(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
    session_id: i32,
    member_session: MemberSession,
) -> Result<Status, Status> {
    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;

    match session::join_session(&mut connection, session_id, member_session.member_id()) {
        Ok(()) => Ok(Status::NoContent),
        Err(SessionError::SessionFull) => Err(Status::Conflict),
        Err(SessionError::UnknownSession(_)) | Err(SessionError::UnknownMember(_)) => {
            Err(Status::NotFound)
        }
        Err(error) => log_error_and_return(Err(Status::InternalServerError))(error),
    }
}

#[post("/sessions/<session_id>/leave")]
pub async fn leave_session(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
    session_id: i32,
    member_session: MemberSession,
) -> Result<Status, Status> {
    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;

    match session::leave_session(&mut connection, session_id, member_session.member_id()) {
        Ok(()) => Ok(Status::NoContent),
        Err(SessionError::UnknownSession(_)) => Err(Status::NotFound),
        Err(error) => log_error_and_return(Err(Status::InternalServerError))(error),
    }
}
