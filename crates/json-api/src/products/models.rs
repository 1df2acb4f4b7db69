//! Product Models

use std::string::ToString;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rentals_app::domain::products::records::ProductRecord;

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    pub uuid: Uuid,
    pub name: String,
    pub description: String,

    /// List price in minor units
    pub price: u64,

    pub on_sale: bool,
    pub sale_price: Option<u64>,

    /// Price a new cart line would capture right now
    pub effective_price: u64,

    pub image_url: String,
    pub available: bool,

    /// First date the product can be rented, `YYYY-MM-DD`
    pub available_date: Option<String>,

    pub created_at: String,
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        Self {
            effective_price: product.effective_price(),
            uuid: product.uuid.into_uuid(),
            name: product.name,
            description: product.description,
            price: product.price,
            on_sale: product.on_sale,
            sale_price: product.sale_price,
            image_url: product.image_url,
            available: product.available,
            available_date: product.available_date.as_ref().map(ToString::to_string),
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}
