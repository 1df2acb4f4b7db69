//! Cart Records

use std::{fmt, str::FromStr};

use jiff::{SignedDuration, Timestamp, civil::Date};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    domain::{products::records::ProductUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Cart UUID
pub type CartUuid = TypedUuid<CartRecord>;

/// Fixed lifetime of a cart, counted from creation.
pub const CART_TTL: SignedDuration = SignedDuration::from_mins(15);

/// Lines held inline; most carts have only a handful.
pub type CartLines = SmallVec<[CartLine; 4]>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CartStatus {
    #[default]
    Active,
    Pending,
}

impl CartStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for CartStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown cart status: {0}")]
pub struct UnknownCartStatus(pub String);

impl FromStr for CartStatus {
    type Err = UnknownCartStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "pending" => Ok(Self::Pending),
            other => Err(UnknownCartStatus(other.to_string())),
        }
    }
}

/// One product in a cart. `price` is the unit price captured when the line was added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_uuid: ProductUuid,
    pub quantity: u32,
    pub price: u64,
}

impl CartLine {
    #[must_use]
    pub fn subtotal(&self, unit_price: u64) -> u64 {
        unit_price.saturating_mul(u64::from(self.quantity))
    }
}

/// Cart Record
#[derive(Debug, Clone, PartialEq)]
pub struct CartRecord {
    pub uuid: CartUuid,
    pub user_uuid: UserUuid,
    pub lines: CartLines,
    pub rental_date: Date,
    pub total_price: u64,
    pub delivery_address: Option<String>,
    pub event_notes: Option<String>,
    pub status: CartStatus,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CartRecord {
    pub fn line_mut(&mut self, product: ProductUuid) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product_uuid == product)
    }

    /// Drop the line for `product`, returning whether one existed.
    pub fn remove_line(&mut self, product: ProductUuid) -> bool {
        let before = self.lines.len();

        self.lines.retain(|line| line.product_uuid != product);

        self.lines.len() != before
    }

    #[must_use]
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at <= now
    }
}

pub(crate) fn snapshot_total(lines: &[CartLine]) -> u64 {
    lines
        .iter()
        .fold(0_u64, |total, line| total.saturating_add(line.subtotal(line.price)))
}
