//! Products Data

use jiff::{ToSpan, civil::Date};

use crate::domain::products::{ProductsServiceError, records::ProductRecord};

/// How far ahead a product's availability date may be scheduled.
pub const AVAILABILITY_WINDOW_DAYS: i64 = 120;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub on_sale: bool,
    pub sale_price: Option<u64>,
    pub image_url: String,
    pub available: bool,
    pub available_date: Option<Date>,
}

impl NewProduct {
    /// Check catalog rules against the given calendar day.
    pub(crate) fn validate(&self, today: Date) -> Result<(), ProductsServiceError> {
        if [&self.name, &self.description, &self.image_url]
            .iter()
            .any(|value| value.trim().is_empty())
        {
            return Err(ProductsServiceError::MissingRequiredData);
        }

        if self
            .sale_price
            .is_some_and(|sale_price| sale_price >= self.price)
        {
            return Err(ProductsServiceError::InvalidData);
        }

        if let Some(available_date) = self.available_date {
            let last_day = today.saturating_add(AVAILABILITY_WINDOW_DAYS.days());

            if available_date < today || available_date > last_day {
                return Err(ProductsServiceError::InvalidData);
            }
        }

        Ok(())
    }
}

/// Product Update Data
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<u64>,
    pub on_sale: Option<bool>,
    pub sale_price: Option<Option<u64>>,
    pub image_url: Option<String>,
    pub available: Option<bool>,
    pub available_date: Option<Option<Date>>,
}

impl ProductUpdate {
    /// Merge the update over an existing record.
    #[must_use]
    pub fn apply_to(self, current: &ProductRecord) -> NewProduct {
        NewProduct {
            name: self.name.unwrap_or_else(|| current.name.clone()),
            description: self
                .description
                .unwrap_or_else(|| current.description.clone()),
            price: self.price.unwrap_or(current.price),
            on_sale: self.on_sale.unwrap_or(current.on_sale),
            sale_price: self.sale_price.unwrap_or(current.sale_price),
            image_url: self.image_url.unwrap_or_else(|| current.image_url.clone()),
            available: self.available.unwrap_or(current.available),
            available_date: self.available_date.unwrap_or(current.available_date),
        }
    }
}
