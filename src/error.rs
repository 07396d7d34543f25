use crate::checkin::error::CheckinError;
use crate::database::error::DatabaseError;
use crate::notification::error::NotificationError;
use crate::session::error::SessionError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("An error has occurred with the database.")]
    Database(#[from] DatabaseError),
    #[error("A check-in operation couldn't be completed.")]
    Checkin(#[from] CheckinError),
    #[error("A training-session operation couldn't be completed.")]
    Session(#[from] SessionError),
    #[error("A notification couldn't be processed.")]
    Notification(#[from] NotificationError),
}
