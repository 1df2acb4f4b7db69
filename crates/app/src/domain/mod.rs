//! Rental Shop Domain Concerns

pub mod bookings;
pub mod carts;
pub mod inquiries;
pub(crate) mod lookup;
pub mod products;
pub mod promotions;
pub mod testimonials;
pub mod users;
