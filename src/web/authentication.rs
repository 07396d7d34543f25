use crate::tools::log_error_and_return;
use crate::web::session_storage::SessionStorage;
use rocket::State;
use rocket::http::{Cookie, Status};
use rocket::outcome::{Outcome, try_outcome};
use rocket::request::{self, FromRequest, Request};
use std::sync::Mutex;

pub const SESSION_COOKIE: &str = "Gym-Member-Session";

/// The member behind the current portal request.
///
/// Endpoints serving member-facing operations take a [MemberSession]
/// parameter; Rocket summons this guard to resolve the private session
/// cookie through the [SessionStorage]. Requests without a live session
/// receive an Unauthorized status.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberSession {
    member_id: i32,
}

impl MemberSession {
    pub fn new(member_id: i32) -> Self {
        Self { member_id }
    }

    pub fn member_id(&self) -> i32 {
        self.member_id
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for MemberSession {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        if let Some(cookie) = get_session_cookie(req) {
            let session_storage = try_outcome!(req.guard::<&State<Mutex<SessionStorage>>>().await);
            match session_storage.lock() {
                Ok(mut session_storage) => match session_storage.get(cookie.value()) {
                    None => Outcome::Forward(Status::Unauthorized),
                    Some(member_id) => Outcome::Success(MemberSession::new(member_id)),
                },
                Err(error) => {
                    log_error_and_return(Outcome::Error((Status::InternalServerError, ())))(error)
                }
            }
        } else {
            Outcome::Forward(Status::Unauthorized)
        }
    }
}

#[cfg(not(test))]
fn get_session_cookie<'a>(req: &'a Request) -> Option<Cookie<'a>> {
    req.cookies().get_private(SESSION_COOKIE)
}

/// For tests, we have to ensure the cookie is there, pending or not. Otherwise, it doesn't work.
/// Thus, the need to hijack the normal method.
#[cfg(test)]
fn get_session_cookie<'a>(req: &'a Request) -> Option<Cookie<'a>> {
    req.cookies().get_pending(SESSION_COOKIE)
}
