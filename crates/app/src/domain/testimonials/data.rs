//! Testimonial Data

use std::ops::RangeInclusive;

use crate::domain::testimonials::{TestimonialsServiceError, records::TestimonialRecord};

pub const RATING_RANGE: RangeInclusive<u8> = 1..=5;

/// New Testimonial Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTestimonial {
    pub name: String,
    pub review: String,
    pub rating: u8,
}

impl NewTestimonial {
    pub(crate) fn validate(&self) -> Result<(), TestimonialsServiceError> {
        if self.name.trim().is_empty() || self.review.trim().is_empty() {
            return Err(TestimonialsServiceError::MissingRequiredData);
        }

        if !RATING_RANGE.contains(&self.rating) {
            return Err(TestimonialsServiceError::InvalidData);
        }

        Ok(())
    }
}

/// Testimonial Update Data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestimonialUpdate {
    pub name: Option<String>,
    pub review: Option<String>,
    pub rating: Option<u8>,
}

impl TestimonialUpdate {
    #[must_use]
    pub fn apply_to(self, current: &TestimonialRecord) -> NewTestimonial {
        NewTestimonial {
            name: self.name.unwrap_or_else(|| current.name.clone()),
            review: self.review.unwrap_or_else(|| current.review.clone()),
            rating: self.rating.unwrap_or(current.rating),
        }
    }
}
