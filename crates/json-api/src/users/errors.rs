//! User Errors

use salvo::http::StatusError;
use tracing::error;

use rentals_app::domain::users::UsersServiceError;

pub(crate) fn into_status_error(error: UsersServiceError) -> StatusError {
    match error {
        UsersServiceError::AlreadyExists => {
            StatusError::conflict().brief("Username or email already taken")
        }
        UsersServiceError::AlreadyRequested => {
            StatusError::conflict().brief("Deletion already requested")
        }
        UsersServiceError::HasHistory => StatusError::conflict()
            .brief("User has bookings or promotions on record and cannot be deleted"),
        UsersServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("All profile fields are required")
        }
        UsersServiceError::InvalidReference | UsersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid user payload")
        }
        UsersServiceError::Forbidden => {
            StatusError::forbidden().brief("Not allowed to manage this account")
        }
        UsersServiceError::NotFound => StatusError::not_found().brief("User not found"),
        UsersServiceError::NoDeletionRequest => {
            StatusError::not_found().brief("No deletion request pending for user")
        }
        UsersServiceError::Password(source) => {
            error!("failed to hash password: {source}");

            StatusError::internal_server_error()
        }
        UsersServiceError::Sql(source) => {
            error!("user storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
