use super::Result;
use crate::database::model::training_session::TrainingSession;
use chrono::NaiveDate;
use diesel::prelude::*;
use dto::session_status::SessionStatus;
use dto::training_session::NewTrainingSession;

pub fn insert_session(
    connection: &mut SqliteConnection,
    new_session: &NewTrainingSession,
) -> Result<dto::training_session::TrainingSession> {
    use crate::database::schema::training_session::*;

    let result = diesel::insert_into(crate::database::schema::training_session::table)
        .values((
            coach_id.eq(new_session.coach_id()),
            title.eq(new_session.title()),
            date.eq(new_session.date().to_string()),
            start_time.eq(new_session.start_time().to_string()),
            end_time.eq(new_session.end_time().to_string()),
            max_participants.eq(*new_session.max_participants() as i32),
            status.eq(new_session.status().to_string()),
        ))
        .returning(TrainingSession::as_returning())
        .get_result(connection)?;

    result.try_into_dto(0)
}

pub fn find_session(
    connection: &mut SqliteConnection,
    session_id: i32,
) -> Result<Option<dto::training_session::TrainingSession>> {
    let result = crate::database::schema::training_session::dsl::training_session
        .filter(crate::database::schema::training_session::id.eq(session_id))
        .select(TrainingSession::as_select())
        .first(connection)
        .optional()?;

    match result {
        Some(result) => {
            let participants = count_participants(connection, result.id())?;
            Ok(Some(result.try_into_dto(participants)?))
        }
        None => Ok(None),
    }
}

pub fn retrieve_sessions(
    connection: &mut SqliteConnection,
) -> Result<Vec<dto::training_session::TrainingSession>> {
    use crate::database::schema::training_session::*;

    let results = crate::database::schema::training_session::dsl::training_session
        .order((date.asc(), start_time.asc()))
        .select(TrainingSession::as_select())
        .load(connection)?;

    load_with_participants(connection, results)
}

/// Sessions that consume the coach's capacity on the given day:
/// anything scheduled or already held, but not cancellations or no-shows.
pub fn retrieve_occupying_for_coach_on_date(
    connection: &mut SqliteConnection,
    target_coach_id: i32,
    target_date: NaiveDate,
) -> Result<Vec<dto::training_session::TrainingSession>> {
    use crate::database::schema::training_session::*;

    let occupying_statuses = vec![
        SessionStatus::Scheduled.to_string(),
        SessionStatus::Completed.to_string(),
    ];
    let results = crate::database::schema::training_session::dsl::training_session
        .filter(coach_id.eq(target_coach_id))
        .filter(date.eq(target_date.to_string()))
        .filter(status.eq_any(occupying_statuses))
        .select(TrainingSession::as_select())
        .load(connection)?;

    load_with_participants(connection, results)
}

pub fn retrieve_upcoming_for_member(
    connection: &mut SqliteConnection,
    target_member_id: i32,
    from: NaiveDate,
    limit: i64,
) -> Result<Vec<dto::training_session::TrainingSession>> {
    use crate::database::schema::training_session::*;
    use crate::database::schema::training_session_member;

    let session_ids: Vec<i32> = training_session_member::dsl::training_session_member
        .filter(training_session_member::member_id.eq(target_member_id))
        .select(training_session_member::session_id)
        .load(connection)?;

    let results = crate::database::schema::training_session::dsl::training_session
        .filter(id.eq_any(session_ids))
        .filter(date.ge(from.to_string()))
        .filter(status.eq(SessionStatus::Scheduled.to_string()))
        .order((date.asc(), start_time.asc()))
        .limit(limit)
        .select(TrainingSession::as_select())
        .load(connection)?;

    load_with_participants(connection, results)
}

pub fn add_participant(
    connection: &mut SqliteConnection,
    target_session_id: i32,
    target_member_id: i32,
) -> Result<usize> {
    use crate::database::schema::training_session_member::*;

    // Joining twice is a no-op thanks to the unique (session, member) pair.
    let count = diesel::insert_or_ignore_into(
        crate::database::schema::training_session_member::table,
    )
    .values((
        session_id.eq(target_session_id),
        member_id.eq(target_member_id),
    ))
    .execute(connection)?;

    Ok(count)
}

pub fn remove_participant(
    connection: &mut SqliteConnection,
    target_session_id: i32,
    target_member_id: i32,
) -> Result<usize> {
    use crate::database::schema::training_session_member::*;

    let count = diesel::delete(
        crate::database::schema::training_session_member::dsl::training_session_member
            .filter(session_id.eq(target_session_id))
            .filter(member_id.eq(target_member_id)),
    )
    .execute(connection)?;

    Ok(count)
}

pub fn count_participants(
    connection: &mut SqliteConnection,
    target_session_id: i32,
) -> Result<u32> {
    use crate::database::schema::training_session_member::*;

    let count: i64 = crate::database::schema::training_session_member::dsl::training_session_member
        .filter(session_id.eq(target_session_id))
        .count()
        .get_result(connection)?;

    Ok(count as u32)
}

fn load_with_participants(
    connection: &mut SqliteConnection,
    results: Vec<TrainingSession>,
) -> Result<Vec<dto::training_session::TrainingSession>> {
    let sessions = {
        let mut sessions = Vec::new();
        for result in results {
            let participants = count_participants(connection, result.id())?;
            sessions.push(result.try_into_dto(participants)?);
        }

        sessions
    };

    Ok(sessions)
}
