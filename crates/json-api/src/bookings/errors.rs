//! Booking Errors

use salvo::http::StatusError;
use tracing::error;

use rentals_app::domain::bookings::BookingsServiceError;

pub(crate) fn into_status_error(error: BookingsServiceError) -> StatusError {
    match error {
        BookingsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Booking already exists")
        }
        BookingsServiceError::MissingRequiredData => StatusError::bad_request()
            .brief("Email, items, total price, rental date and delivery address are required"),
        BookingsServiceError::InvalidReference | BookingsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid booking payload")
        }
        BookingsServiceError::Forbidden => {
            StatusError::forbidden().brief("Not allowed to access this booking")
        }
        BookingsServiceError::NotFound => StatusError::not_found().brief("Booking not found"),
        BookingsServiceError::Sql(source) => {
            error!("booking storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
