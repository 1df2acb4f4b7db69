//! Inquiries

pub mod data;
pub mod errors;
pub mod service;

pub use errors::InquiriesServiceError;
pub use service::*;
