//! Test Helpers

use jiff::civil::{Date, date};

use crate::{
    auth::Identity,
    domain::{
        bookings::data::{NewBooking, NewBookingLine},
        carts::{CartsService, CartsServiceError, data::AddCartItem, models::Cart},
        products::{
            ProductsService, ProductsServiceError,
            data::NewProduct,
            records::{ProductRecord, ProductUuid},
        },
        promotions::data::NewPromotion,
        testimonials::data::NewTestimonial,
        users::{
            data::{NewUser, NewUserRecord},
            records::{DeliveryAddress, Role, UserUuid},
        },
    },
    test::{
        TestContext,
        context::{TEST_PASSWORD, TEST_PASSWORD_HASH},
    },
};

/// Rental date used by cart and booking tests.
pub(crate) fn rental_date() -> Date {
    date(2026, 12, 24)
}

pub(crate) fn new_product(name: &str, price: u64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: format!("{name} for hire"),
        price,
        on_sale: false,
        sale_price: None,
        image_url: "https://img.example.com/product.png".to_string(),
        available: true,
        available_date: None,
    }
}

pub(crate) fn new_user(username: &str) -> NewUser {
    NewUser {
        first_name: "Carol".to_string(),
        last_name: "Tester".to_string(),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: TEST_PASSWORD.to_string(),
        delivery_address: DeliveryAddress {
            street_address: "9 Oak Avenue".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            postal_code: "62704".to_string(),
        },
        phone_number: "555-0199".to_string(),
    }
}

/// Account row with the shared test password.
pub(crate) fn new_user_record(username: &str, first_name: &str, role: Role) -> NewUserRecord {
    NewUserRecord {
        uuid: UserUuid::new(),
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: TEST_PASSWORD_HASH.clone(),
        role,
        delivery_address: DeliveryAddress {
            street_address: "1 Test Lane".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            postal_code: "62701".to_string(),
        },
        phone_number: "555-0100".to_string(),
    }
}

pub(crate) fn new_booking() -> NewBooking {
    NewBooking {
        email: Some("casey@example.com".to_string()),
        items: vec![NewBookingLine {
            product: ProductUuid::new().to_string(),
            quantity: 1,
            price: 5_000,
        }],
        total_price: Some(5_000),
        rental_date: Some(rental_date()),
        delivery_address: Some("12 Elm Street".to_string()),
        event_notes: Some("Birthday party".to_string()),
    }
}

pub(crate) fn new_promotion(title: &str, is_active: bool) -> NewPromotion {
    NewPromotion {
        title: title.to_string(),
        message: format!("{title} deals on every rental"),
        image_url: "https://img.example.com/promo.png".to_string(),
        is_active,
    }
}

pub(crate) fn new_testimonial(rating: u8) -> NewTestimonial {
    NewTestimonial {
        name: "Casey".to_string(),
        review: "The tent was spotless and arrived on time.".to_string(),
        rating,
    }
}

pub(crate) async fn create_product(
    ctx: &TestContext,
    name: &str,
    price: u64,
) -> Result<ProductRecord, ProductsServiceError> {
    ctx.products
        .create_product(ctx.admin, new_product(name, price))
        .await
}

pub(crate) async fn add_item(
    ctx: &TestContext,
    identity: Identity,
    product: ProductUuid,
    quantity: u32,
    rental_date: Date,
) -> Result<Cart, CartsServiceError> {
    ctx.carts
        .add_item(
            identity,
            AddCartItem {
                product: Some(product),
                quantity: Some(quantity),
                rental_date: Some(rental_date),
            },
        )
        .await
}
