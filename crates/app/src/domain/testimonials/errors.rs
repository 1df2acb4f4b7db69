//! Testimonials service errors.

use sqlx::Error;
use thiserror::Error;

use crate::database::{StoreErrorKind, classify};

#[derive(Debug, Error)]
pub enum TestimonialsServiceError {
    #[error("testimonial already exists")]
    AlreadyExists,

    #[error("testimonial not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("not allowed to manage this testimonial")]
    Forbidden,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for TestimonialsServiceError {
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
