//! Display fields resolved onto carts and bookings.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use rentals_app::domain::{products::records::ProductSummary, users::records::UserContact};

/// Contact details of the owning user
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OwnerResponse {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

impl From<UserContact> for OwnerResponse {
    fn from(contact: UserContact) -> Self {
        Self {
            first_name: contact.first_name,
            last_name: contact.last_name,
            email: contact.email,
            phone_number: contact.phone_number,
        }
    }
}

/// Catalog details of a line's product
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductSummaryResponse {
    pub name: String,
    pub image_url: String,

    /// Current list price, which may differ from the line price
    pub price: u64,
}

impl From<ProductSummary> for ProductSummaryResponse {
    fn from(summary: ProductSummary) -> Self {
        Self {
            name: summary.name,
            image_url: summary.image_url,
            price: summary.price,
        }
    }
}
