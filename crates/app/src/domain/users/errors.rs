//! Users service errors.

use sqlx::Error;
use thiserror::Error;

use crate::{
    auth::PasswordError,
    database::{StoreErrorKind, classify},
};

#[derive(Debug, Error)]
pub enum UsersServiceError {
    #[error("user already exists")]
    AlreadyExists,

    #[error("user not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("not allowed to manage this account")]
    Forbidden,

    #[error("deletion already requested")]
    AlreadyRequested,

    #[error("no deletion request pending for user")]
    NoDeletionRequest,

    #[error("user still has bookings or promotions on record")]
    HasHistory,

    #[error("password processing error")]
    Password(#[from] PasswordError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for UsersServiceError {
    fn from(error: Error) -> Self {
        match classify(&error) {
            StoreErrorKind::NotFound => Self::NotFound,
            StoreErrorKind::AlreadyExists => Self::AlreadyExists,
            StoreErrorKind::InvalidReference => Self::InvalidReference,
            StoreErrorKind::MissingRequiredData => Self::MissingRequiredData,
            StoreErrorKind::InvalidData => Self::InvalidData,
            StoreErrorKind::Other => Self::Sql(error),
        }
    }
}

impl UsersServiceError {
    /// Classify a failed user delete. Bookings and promotions restrict the delete.
    pub(crate) fn from_delete(error: Error) -> Self {
        match classify(&error) {
            StoreErrorKind::InvalidReference => Self::HasHistory,
            _ => error.into(),
        }
    }
}
