//! Testimonial Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rentals_app::domain::testimonials::records::TestimonialRecord;

/// Testimonial Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TestimonialResponse {
    pub uuid: Uuid,

    /// Author
    pub user_uuid: Uuid,

    pub name: String,
    pub review: String,
    pub rating: u8,
    pub created_at: String,
    pub updated_at: String,
}

impl From<TestimonialRecord> for TestimonialResponse {
    fn from(testimonial: TestimonialRecord) -> Self {
        Self {
            uuid: testimonial.uuid.into_uuid(),
            user_uuid: testimonial.user_uuid.into_uuid(),
            name: testimonial.name,
            review: testimonial.review,
            rating: testimonial.rating,
            created_at: testimonial.created_at.to_string(),
            updated_at: testimonial.updated_at.to_string(),
        }
    }
}
