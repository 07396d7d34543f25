use crate::database::dao;
use crate::error::ApplicationError;
use crate::notification::dispatch::send_notifications;
use crate::notification::error::NotificationError;
use crate::tools::log_error_and_return;
use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use dto::email_kind::EmailKind;
use dto::send_email::SendEmailRequest;
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::{Json, json};
use std::str::FromStr;

/// Trigger one dispatch run and report its outcome counters. Individual
/// delivery failures are folded into the summary and the log, never into
/// the response status.
#[post("/emails/send", format = "application/json", data = "<request>")]
pub async fn send_emails(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
    request: Json<SendEmailRequest>,
) -> Result<String, Status> {
    let request = request.into_inner();

    match send_notifications(
        pool,
        request.kind(),
        request.member_ids().as_deref(),
        *request.force_send(),
    )
    .await
    {
        Ok(summary) => Ok(json!(summary).to_string()),
        Err(ApplicationError::Notification(NotificationError::InvalidKind(kind))) => {
            debug!("Can't dispatch emails of kind {kind}");
            Err(Status::BadRequest)
        }
        Err(error) => log_error_and_return(Err(Status::InternalServerError))(error),
    }
}

#[get("/emails/logs?<member_id>&<kind>")]
pub async fn list_email_logs(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
    member_id: Option<i32>,
    kind: Option<String>,
) -> Result<String, Status> {
    let kind = match kind {
        Some(kind) => {
            Some(EmailKind::from_str(&kind).map_err(log_error_and_return(Status::BadRequest))?)
        }
        None => None,
    };

    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    let entries = dao::email_log::retrieve_entries(&mut connection, member_id, kind.as_ref())
        .map_err(log_error_and_return(Status::InternalServerError))?;

    Ok(json!(entries).to_string())
}
