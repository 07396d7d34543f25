use crate::database::dao;
use crate::database::error::DatabaseError;
use crate::member::import_from_file::parse_members_csv;
use crate::member::stats::compute_member_stats;
use crate::tools::log_error_and_return;
use crate::web::api::get_now;
use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use dto::csv_member::ImportSummary;
use dto::member::NewMember;
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::{Json, json};

#[get("/members")]
pub async fn list_members(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
) -> Result<String, Status> {
    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    let members = dao::member::retrieve_members(&mut connection)
        .map_err(log_error_and_return(Status::InternalServerError))?;

    Ok(json!(members).to_string())
}

#[post("/members", format = "application/json", data = "<new_member>")]
pub async fn create_member(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
    new_member: Json<NewMember>,
) -> Result<(Status, String), Status> {
    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;

    match dao::member::insert_member(&mut connection, &new_member.into_inner(), get_now()) {
        Ok(member) => Ok((Status::Created, json!(member).to_string())),
        Err(DatabaseError::Duplicate) => Err(Status::Conflict),
        Err(error) => log_error_and_return(Err(Status::InternalServerError))(error),
    }
}

#[get("/members/<member_id>")]
pub async fn get_member(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
    member_id: i32,
) -> Result<String, Status> {
    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    let member = dao::member::find_member(&mut connection, member_id)
        .map_err(log_error_and_return(Status::InternalServerError))?
        .ok_or(Status::NotFound)?;

    Ok(json!(member).to_string())
}

#[put("/members/<member_id>", format = "application/json", data = "<new_member>")]
pub async fn update_member(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
    member_id: i32,
    new_member: Json<NewMember>,
) -> Result<String, Status> {
    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;

    match dao::member::update_member(&mut connection, member_id, &new_member.into_inner()) {
        Ok(0) => Err(Status::NotFound),
        Ok(_) => {
            let member = dao::member::find_member(&mut connection, member_id)
                .map_err(log_error_and_return(Status::InternalServerError))?
                .ok_or(Status::NotFound)?;
            Ok(json!(member).to_string())
        }
        Err(DatabaseError::Duplicate) => Err(Status::Conflict),
        Err(error) => log_error_and_return(Err(Status::InternalServerError))(error),
    }
}

/// Members are soft-deactivated so their history stays queryable.
#[delete("/members/<member_id>")]
pub async fn delete_member(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
    member_id: i32,
) -> Result<Status, Status> {
    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    let count = dao::member::deactivate_member(&mut connection, member_id)
        .map_err(log_error_and_return(Status::InternalServerError))?;

    if count == 0 {
        Err(Status::NotFound)
    } else {
        Ok(Status::NoContent)
    }
}

#[get("/members/stats")]
pub async fn member_stats(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
) -> Result<String, Status> {
    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    let stats = compute_member_stats(&mut connection, get_now().date())
        .map_err(log_error_and_return(Status::InternalServerError))?;

    Ok(json!(stats).to_string())
}

/// Bulk-create members from a CSV body. Rows that fail to parse or collide
/// with an existing email end up in the summary's error list; the rest are
/// created.
#[post("/members/bulk", format = "text/csv", data = "<csv_content>")]
pub async fn bulk_import_members(
    pool: &State<Pool<ConnectionManager<SqliteConnection>>>,
    csv_content: String,
) -> Result<(Status, String), Status> {
    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;

    let (members, mut errors) = parse_members_csv(&csv_content);
    let mut created = 0;
    for member in members {
        match dao::member::insert_member(&mut connection, &member, get_now()) {
            Ok(_) => created += 1,
            Err(DatabaseError::Duplicate) => {
                errors.push(format!("{}: a member with this email already exists", member.email()));
            }
            Err(error) => {
                return log_error_and_return(Err(Status::InternalServerError))(error);
            }
        }
    }

    let summary = ImportSummary::new(created, errors);

    Ok((Status::Created, json!(summary).to_string()))
}
