//! Testimonial Records

use jiff::Timestamp;

use crate::{domain::users::records::UserUuid, uuids::TypedUuid};

/// Testimonial UUID
pub type TestimonialUuid = TypedUuid<TestimonialRecord>;

/// Testimonial Record
#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialRecord {
    pub uuid: TestimonialUuid,
    pub user_uuid: UserUuid,
    pub name: String,
    pub review: String,

    /// Star rating, 1 to 5.
    pub rating: u8,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
