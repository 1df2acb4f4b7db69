//! Promotion Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rentals_app::domain::promotions::records::PromotionRecord;

/// Promotion Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PromotionResponse {
    pub uuid: Uuid,
    pub title: String,
    pub message: String,
    pub image_url: String,
    pub is_active: bool,

    /// Admin who created the promotion
    pub created_by: Uuid,

    pub created_at: String,
    pub updated_at: String,
}

impl From<PromotionRecord> for PromotionResponse {
    fn from(promotion: PromotionRecord) -> Self {
        Self {
            uuid: promotion.uuid.into_uuid(),
            title: promotion.title,
            message: promotion.message,
            image_url: promotion.image_url,
            is_active: promotion.is_active,
            created_by: promotion.created_by.into_uuid(),
            created_at: promotion.created_at.to_string(),
            updated_at: promotion.updated_at.to_string(),
        }
    }
}
