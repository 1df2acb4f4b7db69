//! Promotions service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    auth::Identity,
    domain::promotions::{
        data::{NewPromotion, PromotionUpdate},
        errors::PromotionsServiceError,
        records::{PromotionRecord, PromotionUuid},
        repository::PromotionsRepository,
    },
};

#[derive(Clone)]
pub struct PromotionsManager {
    repository: Arc<dyn PromotionsRepository>,
}

impl PromotionsManager {
    #[must_use]
    pub fn new(repository: Arc<dyn PromotionsRepository>) -> Self {
        Self { repository }
    }
}

fn require_admin(identity: Identity) -> Result<(), PromotionsServiceError> {
    if identity.is_admin {
        Ok(())
    } else {
        Err(PromotionsServiceError::Forbidden)
    }
}

fn non_empty(
    promotions: Vec<PromotionRecord>,
) -> Result<Vec<PromotionRecord>, PromotionsServiceError> {
    if promotions.is_empty() {
        Err(PromotionsServiceError::NotFound)
    } else {
        Ok(promotions)
    }
}

#[async_trait]
impl PromotionsService for PromotionsManager {
    async fn list_promotions(
        &self,
        identity: Identity,
    ) -> Result<Vec<PromotionRecord>, PromotionsServiceError> {
        require_admin(identity)?;

        non_empty(self.repository.list_promotions().await?)
    }

    async fn list_active(&self) -> Result<Vec<PromotionRecord>, PromotionsServiceError> {
        non_empty(self.repository.list_active_promotions().await?)
    }

    async fn get_promotion(
        &self,
        identity: Identity,
        promotion: PromotionUuid,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        require_admin(identity)?;

        Ok(self.repository.get_promotion(promotion).await?)
    }

    async fn create_promotion(
        &self,
        identity: Identity,
        promotion: NewPromotion,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        require_admin(identity)?;

        promotion.validate()?;

        let created = self
            .repository
            .create_promotion(PromotionUuid::new(), identity.user, &promotion)
            .await?;

        info!(promotion_uuid = %created.uuid, is_active = created.is_active, "created promotion");

        Ok(created)
    }

    async fn update_promotion(
        &self,
        identity: Identity,
        promotion: PromotionUuid,
        update: PromotionUpdate,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        require_admin(identity)?;

        let current = self.repository.get_promotion(promotion).await?;
        let merged = update.apply_to(&current);

        merged.validate()?;

        Ok(self.repository.update_promotion(promotion, &merged).await?)
    }

    async fn delete_promotion(
        &self,
        identity: Identity,
        promotion: PromotionUuid,
    ) -> Result<(), PromotionsServiceError> {
        require_admin(identity)?;

        if self.repository.delete_promotion(promotion).await? == 0 {
            return Err(PromotionsServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait PromotionsService: Send + Sync {
    /// Every promotion, admin only. An empty list is `NotFound`.
    async fn list_promotions(
        &self,
        identity: Identity,
    ) -> Result<Vec<PromotionRecord>, PromotionsServiceError>;

    /// Active promotions for shoppers, newest first. An empty list is `NotFound`.
    async fn list_active(&self) -> Result<Vec<PromotionRecord>, PromotionsServiceError>;

    async fn get_promotion(
        &self,
        identity: Identity,
        promotion: PromotionUuid,
    ) -> Result<PromotionRecord, PromotionsServiceError>;

    async fn create_promotion(
        &self,
        identity: Identity,
        promotion: NewPromotion,
    ) -> Result<PromotionRecord, PromotionsServiceError>;

    async fn update_promotion(
        &self,
        identity: Identity,
        promotion: PromotionUuid,
        update: PromotionUpdate,
    ) -> Result<PromotionRecord, PromotionsServiceError>;

    async fn delete_promotion(
        &self,
        identity: Identity,
        promotion: PromotionUuid,
    ) -> Result<(), PromotionsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{TestContext, helpers::new_promotion};

    use super::*;

    #[tokio::test]
    async fn create_promotion_records_creator() -> TestResult {
        let ctx = TestContext::new();

        let promotion = ctx
            .promotions
            .create_promotion(ctx.admin, new_promotion("Summer Sale", true))
            .await?;

        assert_eq!(promotion.created_by, ctx.admin.user);
        assert!(promotion.is_active);

        Ok(())
    }

    #[tokio::test]
    async fn create_promotion_requires_admin() {
        let ctx = TestContext::new();

        let result = ctx
            .promotions
            .create_promotion(ctx.customer, new_promotion("Summer Sale", true))
            .await;

        assert!(
            matches!(result, Err(PromotionsServiceError::Forbidden)),
            "expected Forbidden, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_promotion_requires_title_message_and_image() {
        let ctx = TestContext::new();

        let promotion = NewPromotion {
            image_url: String::new(),
            ..new_promotion("Summer Sale", true)
        };

        let result = ctx.promotions.create_promotion(ctx.admin, promotion).await;

        assert!(
            matches!(result, Err(PromotionsServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn empty_listings_are_not_found() {
        let ctx = TestContext::new();

        let all = ctx.promotions.list_promotions(ctx.admin).await;
        let active = ctx.promotions.list_active().await;

        assert!(
            matches!(all, Err(PromotionsServiceError::NotFound)),
            "expected NotFound, got {all:?}"
        );
        assert!(
            matches!(active, Err(PromotionsServiceError::NotFound)),
            "expected NotFound, got {active:?}"
        );
    }

    #[tokio::test]
    async fn list_active_skips_inactive_and_sorts_newest_first() -> TestResult {
        let ctx = TestContext::new();

        ctx.promotions
            .create_promotion(ctx.admin, new_promotion("Spring", true))
            .await?;
        ctx.promotions
            .create_promotion(ctx.admin, new_promotion("Hidden", false))
            .await?;
        ctx.promotions
            .create_promotion(ctx.admin, new_promotion("Autumn", true))
            .await?;

        let active = ctx.promotions.list_active().await?;
        let titles: Vec<&str> = active.iter().map(|promo| promo.title.as_str()).collect();

        assert_eq!(titles, ["Autumn", "Spring"]);

        Ok(())
    }

    #[tokio::test]
    async fn update_promotion_toggles_activity() -> TestResult {
        let ctx = TestContext::new();

        let promotion = ctx
            .promotions
            .create_promotion(ctx.admin, new_promotion("Summer Sale", false))
            .await?;

        let updated = ctx
            .promotions
            .update_promotion(
                ctx.admin,
                promotion.uuid,
                PromotionUpdate {
                    is_active: Some(true),
                    ..PromotionUpdate::default()
                },
            )
            .await?;

        assert!(updated.is_active);
        assert_eq!(updated.title, "Summer Sale");

        Ok(())
    }

    #[tokio::test]
    async fn delete_unknown_promotion_is_not_found() {
        let ctx = TestContext::new();

        let result = ctx
            .promotions
            .delete_promotion(ctx.admin, PromotionUuid::new())
            .await;

        assert!(
            matches!(result, Err(PromotionsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
