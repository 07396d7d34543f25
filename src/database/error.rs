use crate::database::error::DatabaseError::{Duplicate, UnderlyingDatabase};
use std::error::Error;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DatabaseError {
    #[error("The --database-url argument is missing.")]
    MissingDatabaseUrl,
    #[error("The connection to the database failed.")]
    ConnectionFailed,
    #[error("A record with the same unique value already exists.")]
    Duplicate,
    #[error("A stored date couldn't be read back: {0}")]
    InvalidStoredDate(String),
    #[error("A stored value couldn't be read back: {0}")]
    InvalidStoredValue(String),
    #[error("An error occurred within the database.")]
    UnderlyingDatabase(String),
}

impl From<diesel::result::Error> for DatabaseError {
    fn from(value: diesel::result::Error) -> Self {
        match value {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ) => Duplicate,
            _ => UnderlyingDatabase(value.to_string()),
        }
    }
}

impl From<chrono::ParseError> for DatabaseError {
    fn from(value: chrono::ParseError) -> Self {
        DatabaseError::InvalidStoredDate(value.to_string())
    }
}

impl From<Box<dyn Error + Send + Sync + 'static>> for DatabaseError {
    fn from(value: Box<dyn Error + Send + Sync + 'static>) -> Self {
        UnderlyingDatabase(value.to_string())
    }
}
