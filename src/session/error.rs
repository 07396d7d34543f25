use crate::database::error::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("The session is full.")]
    SessionFull,
    #[error("No training session with id {0}.")]
    UnknownSession(i32),
    #[error("No member with id {0}.")]
    UnknownMember(i32),
    #[error(transparent)]
    Database(#[from] DatabaseError),
}
