//! Product Records

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,

    /// List price in minor units.
    pub price: u64,
    pub on_sale: bool,
    pub sale_price: Option<u64>,
    pub image_url: String,
    pub available: bool,
    pub available_date: Option<Date>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProductRecord {
    /// Price a customer pays right now: the sale price while on sale, otherwise the list price.
    #[must_use]
    pub fn effective_price(&self) -> u64 {
        match (self.on_sale, self.sale_price) {
            (true, Some(sale_price)) => sale_price,
            _ => self.price,
        }
    }

    #[must_use]
    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            name: self.name.clone(),
            image_url: self.image_url.clone(),
            price: self.price,
        }
    }
}

/// Display fields resolved onto cart and booking lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub name: String,
    pub image_url: String,
    pub price: u64,
}
