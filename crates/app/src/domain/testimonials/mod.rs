//! Testimonials

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::TestimonialsServiceError;
pub use repository::{MockTestimonialsRepository, PgTestimonialsRepository, TestimonialsRepository};
pub use service::*;
