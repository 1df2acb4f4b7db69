//! Testimonial Errors

use salvo::http::StatusError;
use tracing::error;

use rentals_app::domain::testimonials::TestimonialsServiceError;

pub(crate) fn into_status_error(error: TestimonialsServiceError) -> StatusError {
    match error {
        TestimonialsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Testimonial already exists")
        }
        TestimonialsServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Name and review are required")
        }
        TestimonialsServiceError::InvalidData => {
            StatusError::bad_request().brief("Rating must be between 1 and 5")
        }
        TestimonialsServiceError::InvalidReference => {
            StatusError::bad_request().brief("Invalid testimonial payload")
        }
        TestimonialsServiceError::Forbidden => {
            StatusError::forbidden().brief("Not allowed to manage this testimonial")
        }
        TestimonialsServiceError::NotFound => {
            StatusError::not_found().brief("Testimonial not found")
        }
        TestimonialsServiceError::Sql(source) => {
            error!("testimonial storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
