//! Carts service errors.

use sqlx::Error;
use thiserror::Error;

use crate::database::{StoreErrorKind, classify};

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("cart already exists")]
    AlreadyExists,

    #[error("cart not found")]
    NotFound,

    #[error("product not found")]
    ProductNotFound,

    #[error("cart already holds items for a different rental date")]
    RentalDateConflict,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("not allowed to access this cart")]
    Forbidden,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsServiceError {
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
