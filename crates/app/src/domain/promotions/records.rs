//! Promotion Records

use jiff::Timestamp;

use crate::{domain::users::records::UserUuid, uuids::TypedUuid};

/// Promotion UUID
pub type PromotionUuid = TypedUuid<PromotionRecord>;

/// Promotion Record
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionRecord {
    pub uuid: PromotionUuid,
    pub title: String,
    pub message: String,
    pub image_url: String,

    /// Only active promotions are shown to shoppers.
    pub is_active: bool,
    pub created_by: UserUuid,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
