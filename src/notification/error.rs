use dto::email_kind::EmailKind;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum NotificationError {
    #[error("Emails of kind {0} can't be dispatched.")]
    InvalidKind(EmailKind),
    #[error("The email body couldn't be rendered.")]
    CantRenderBody,
    #[error(transparent)]
    Email(#[from] crate::tools::email::Error),
}

impl From<tera::Error> for NotificationError {
    fn from(value: tera::Error) -> Self {
        error!("Tera error\n{value:#?}");
        NotificationError::CantRenderBody
    }
}
