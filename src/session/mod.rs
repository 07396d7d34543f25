use crate::database::dao;
use crate::session::error::SessionError;
use crate::session::error::SessionError::{SessionFull, UnknownMember, UnknownSession};
use diesel::SqliteConnection;

pub mod error;

type Result<T, E = SessionError> = std::result::Result<T, E>;

/// Add the member to the session unless it has reached its capacity.
/// Joining a session twice is a no-op, not an error.
pub fn join_session(
    connection: &mut SqliteConnection,
    session_id: i32,
    member_id: i32,
) -> Result<()> {
    let session = dao::training_session::find_session(connection, session_id)?
        .ok_or(UnknownSession(session_id))?;
    dao::member::find_member(connection, member_id)?.ok_or(UnknownMember(member_id))?;

    if session.is_full() {
        return Err(SessionFull);
    }

    dao::training_session::add_participant(connection, session_id, member_id)?;

    Ok(())
}

pub fn leave_session(
    connection: &mut SqliteConnection,
    session_id: i32,
    member_id: i32,
) -> Result<()> {
    dao::training_session::find_session(connection, session_id)?
        .ok_or(UnknownSession(session_id))?;

    dao::training_session::remove_participant(connection, session_id, member_id)?;

    Ok(())
}
