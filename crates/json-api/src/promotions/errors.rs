//! Promotion Errors

use salvo::http::StatusError;
use tracing::error;

use rentals_app::domain::promotions::PromotionsServiceError;

pub(crate) fn into_status_error(error: PromotionsServiceError) -> StatusError {
    match error {
        PromotionsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Promotion already exists")
        }
        PromotionsServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Title, message and image are required")
        }
        PromotionsServiceError::InvalidReference | PromotionsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid promotion payload")
        }
        PromotionsServiceError::Forbidden => {
            StatusError::forbidden().brief("Admin access required")
        }
        PromotionsServiceError::NotFound => StatusError::not_found().brief("No promotions found"),
        PromotionsServiceError::Sql(source) => {
            error!("promotion storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
