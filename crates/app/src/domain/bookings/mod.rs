//! Bookings

pub mod data;
pub mod errors;
pub mod models;
pub mod records;
mod repository;
pub mod service;

pub use errors::BookingsServiceError;
pub use repository::{BookingsRepository, MockBookingsRepository, PgBookingsRepository};
pub use service::*;
