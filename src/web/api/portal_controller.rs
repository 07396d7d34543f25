use crate::database::dao;
use crate::member::dashboard::build_dashboard;
use crate::tools::log_error_and_return;
use crate::web::api::get_now;
use crate::web::authentication::{MemberSession, SESSION_COOKIE};
use crate::web::session_storage::SessionStorage;
use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use dto::dashboard::LoginRequest;
use rocket::State;
use rocket::http::{Cookie, CookieJar, Status};
use rocket::serde::json::{Json, json};
use rocket::time::Duration;
use std::sync::Mutex;
use uuid::Uuid;

/// Bind a portal session to the member profile matching the given email.
/// A new token is created and stored, and handed back to the caller through
/// a private cookie. Verifying the caller's identity is the front door's
/// job; members without a profile get a NotFound.
#[post("/portal/login", format = "application/json", data = "<request>")]
pub async fn login(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
    session_storage: &State<Mutex<SessionStorage>>,
    cookie_jar: &CookieJar<'_>,
    request: Json<LoginRequest>,
) -> Result<Status, Status> {
    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    let member = dao::member::find_member_by_email(&mut connection, request.email())
        .map_err(log_error_and_return(Status::InternalServerError))?
        .ok_or(Status::NotFound)?;

    let mut session_storage = session_storage
        .lock()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    let token = Uuid::new_v4().to_string();
    let cookie = Cookie::build((SESSION_COOKIE.to_owned(), token.clone()))
        .max_age(Duration::days(1))
        .build();
    cookie_jar.add_private(cookie);
    session_storage.store(token, *member.id());

    Ok(Status::NoContent)
}

#[get("/portal/dashboard")]
pub async fn dashboard(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
    member_session: MemberSession,
) -> Result<String, Status> {
    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    let member = dao::member::find_member(&mut connection, member_session.member_id())
        .map_err(log_error_and_return(Status::InternalServerError))?
        .ok_or(Status::NotFound)?;

    let dashboard = build_dashboard(&mut connection, member, get_now().date())
        .map_err(log_error_and_return(Status::InternalServerError))?;

    Ok(json!(dashboard).to_string())
}
