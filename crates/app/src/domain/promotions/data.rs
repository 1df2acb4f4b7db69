//! Promotion Data

use crate::domain::promotions::{PromotionsServiceError, records::PromotionRecord};

/// New Promotion Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewPromotion {
    pub title: String,
    pub message: String,
    pub image_url: String,
    pub is_active: bool,
}

impl NewPromotion {
    pub(crate) fn validate(&self) -> Result<(), PromotionsServiceError> {
        if [&self.title, &self.message, &self.image_url]
            .iter()
            .any(|value| value.trim().is_empty())
        {
            return Err(PromotionsServiceError::MissingRequiredData);
        }

        Ok(())
    }
}

/// Promotion Update Data
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromotionUpdate {
    pub title: Option<String>,
    pub message: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

impl PromotionUpdate {
    #[must_use]
    pub fn apply_to(self, current: &PromotionRecord) -> NewPromotion {
        NewPromotion {
            title: self.title.unwrap_or_else(|| current.title.clone()),
            message: self.message.unwrap_or_else(|| current.message.clone()),
            image_url: self.image_url.unwrap_or_else(|| current.image_url.clone()),
            is_active: self.is_active.unwrap_or(current.is_active),
        }
    }
}
