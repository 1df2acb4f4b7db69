//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use rentals_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::AlreadyExists => StatusError::conflict().brief("Cart already exists"),
        CartsServiceError::RentalDateConflict => StatusError::conflict()
            .brief("Cart already holds items for a different rental date"),
        CartsServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Product, quantity and rental date are required")
        }
        CartsServiceError::InvalidReference | CartsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid cart payload")
        }
        CartsServiceError::Forbidden => {
            StatusError::forbidden().brief("Not allowed to access this cart")
        }
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart not found"),
        CartsServiceError::ProductNotFound => StatusError::not_found().brief("Product not found"),
        CartsServiceError::Sql(source) => {
            error!("cart storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
