use crate::database::error::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CheckinError {
    #[error("The member already has an open check-in today.")]
    AlreadyCheckedIn,
    #[error("The member has no open check-in to close.")]
    NoActiveCheckin,
    #[error("No member with id {0}.")]
    UnknownMember(i32),
    #[error(transparent)]
    Database(#[from] DatabaseError),
}
