//! Promotions

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::PromotionsServiceError;
pub use repository::{MockPromotionsRepository, PgPromotionsRepository, PromotionsRepository};
pub use service::*;
