//! Inquiry Errors

use salvo::http::StatusError;
use tracing::error;

use rentals_app::domain::inquiries::InquiriesServiceError;

pub(crate) fn into_status_error(error: InquiriesServiceError) -> StatusError {
    match error {
        InquiriesServiceError::MissingRequiredData => StatusError::bad_request()
            .brief("Name, email, phone, address and description are required"),
        InquiriesServiceError::Mailer(source) => {
            error!("failed to deliver inquiry: {source}");

            StatusError::internal_server_error().brief("Failed to send inquiry")
        }
    }
}
