//! Testimonials service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    auth::Identity,
    domain::testimonials::{
        data::{NewTestimonial, TestimonialUpdate},
        errors::TestimonialsServiceError,
        records::{TestimonialRecord, TestimonialUuid},
        repository::TestimonialsRepository,
    },
};

#[derive(Clone)]
pub struct TestimonialsManager {
    repository: Arc<dyn TestimonialsRepository>,
}

impl TestimonialsManager {
    #[must_use]
    pub fn new(repository: Arc<dyn TestimonialsRepository>) -> Self {
        Self { repository }
    }

    async fn owned(
        &self,
        identity: Identity,
        testimonial: TestimonialUuid,
    ) -> Result<TestimonialRecord, TestimonialsServiceError> {
        let record = self.repository.get_testimonial(testimonial).await?;

        if !identity.can_access(record.user_uuid) {
            return Err(TestimonialsServiceError::Forbidden);
        }

        Ok(record)
    }
}

#[async_trait]
impl TestimonialsService for TestimonialsManager {
    async fn list_testimonials(&self) -> Result<Vec<TestimonialRecord>, TestimonialsServiceError> {
        Ok(self.repository.list_testimonials().await?)
    }

    async fn create_testimonial(
        &self,
        identity: Identity,
        testimonial: NewTestimonial,
    ) -> Result<TestimonialRecord, TestimonialsServiceError> {
        testimonial.validate()?;

        let created = self
            .repository
            .create_testimonial(TestimonialUuid::new(), identity.user, &testimonial)
            .await?;

        info!(testimonial_uuid = %created.uuid, rating = created.rating, "created testimonial");

        Ok(created)
    }

    async fn update_testimonial(
        &self,
        identity: Identity,
        testimonial: TestimonialUuid,
        update: TestimonialUpdate,
    ) -> Result<TestimonialRecord, TestimonialsServiceError> {
        let current = self.owned(identity, testimonial).await?;
        let merged = update.apply_to(&current);

        merged.validate()?;

        Ok(self
            .repository
            .update_testimonial(testimonial, &merged)
            .await?)
    }

    async fn delete_testimonial(
        &self,
        identity: Identity,
        testimonial: TestimonialUuid,
    ) -> Result<(), TestimonialsServiceError> {
        self.owned(identity, testimonial).await?;

        if self.repository.delete_testimonial(testimonial).await? == 0 {
            return Err(TestimonialsServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait TestimonialsService: Send + Sync {
    async fn list_testimonials(&self) -> Result<Vec<TestimonialRecord>, TestimonialsServiceError>;

    /// Publish a testimonial as the caller.
    async fn create_testimonial(
        &self,
        identity: Identity,
        testimonial: NewTestimonial,
    ) -> Result<TestimonialRecord, TestimonialsServiceError>;

    /// Author or admin only.
    async fn update_testimonial(
        &self,
        identity: Identity,
        testimonial: TestimonialUuid,
        update: TestimonialUpdate,
    ) -> Result<TestimonialRecord, TestimonialsServiceError>;

    /// Author or admin only.
    async fn delete_testimonial(
        &self,
        identity: Identity,
        testimonial: TestimonialUuid,
    ) -> Result<(), TestimonialsServiceError>;
}
