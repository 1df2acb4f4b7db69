//! Test helpers.

use std::sync::Arc;

use jiff::{Timestamp, civil::date};
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use rentals_app::{
    auth::{Identity, MockAuthService},
    context::AppContext,
    domain::{
        bookings::{
            MockBookingsService,
            models::{Booking, BookingItem},
            records::{BookingStatus, BookingUuid},
        },
        carts::{
            MockCartsRepository, MockCartsService,
            models::{Cart, CartItem},
            records::{CartStatus, CartUuid},
        },
        inquiries::MockInquiriesService,
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
        promotions::{
            MockPromotionsService,
            records::{PromotionRecord, PromotionUuid},
        },
        testimonials::{
            MockTestimonialsService,
            records::{TestimonialRecord, TestimonialUuid},
        },
        users::{
            MockUsersService,
            records::{DeliveryAddress, Role, UserRecord, UserUuid},
        },
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_CUSTOMER: Identity = Identity::user(UserUuid::from_uuid(Uuid::nil()));
pub(crate) const TEST_ADMIN: Identity = Identity::admin(UserUuid::from_uuid(Uuid::from_u128(1)));

#[salvo::handler]
async fn as_customer(req: &mut Request, depot: &mut Depot, res: &mut Response, ctrl: &mut FlowCtrl) {
    depot.insert_identity(TEST_CUSTOMER);
    ctrl.call_next(req, depot, res).await;
}

#[salvo::handler]
async fn as_admin(req: &mut Request, depot: &mut Depot, res: &mut Response, ctrl: &mut FlowCtrl) {
    depot.insert_identity(TEST_ADMIN);
    ctrl.call_next(req, depot, res).await;
}

/// Every service is a mock with no expectations, so any unexpected call fails the test.
pub(crate) fn strict_app() -> AppContext {
    AppContext {
        products: Arc::new(MockProductsService::new()),
        users: Arc::new(MockUsersService::new()),
        carts: Arc::new(MockCartsService::new()),
        bookings: Arc::new(MockBookingsService::new()),
        promotions: Arc::new(MockPromotionsService::new()),
        testimonials: Arc::new(MockTestimonialsService::new()),
        inquiries: Arc::new(MockInquiriesService::new()),
        auth: Arc::new(MockAuthService::new()),
        cart_store: Arc::new(MockCartsRepository::new()),
    }
}

fn service(app: AppContext, caller: Option<Identity>, route: Router) -> Service {
    let router = Router::new().hoop(inject(State::from_app_context(app)));

    let router = match caller {
        Some(identity) if identity.is_admin => router.hoop(as_admin),
        Some(_) => router.hoop(as_customer),
        None => router,
    };

    Service::new(router.push(route))
}

pub(crate) fn public_service(app: AppContext, route: Router) -> Service {
    service(app, None, route)
}

pub(crate) fn customer_service(app: AppContext, route: Router) -> Service {
    service(app, Some(TEST_CUSTOMER), route)
}

pub(crate) fn admin_service(app: AppContext, route: Router) -> Service {
    service(app, Some(TEST_ADMIN), route)
}

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        name: "Bounce House".to_string(),
        description: "Inflatable castle, 4m x 4m".to_string(),
        price: 15_000,
        on_sale: false,
        sale_price: None,
        image_url: "https://img.example.com/castle.png".to_string(),
        available: true,
        available_date: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_user(uuid: UserUuid, role: Role) -> UserRecord {
    UserRecord {
        uuid,
        first_name: "Casey".to_string(),
        last_name: "Jordan".to_string(),
        username: "casey".to_string(),
        email: "casey@example.com".to_string(),
        role,
        delivery_address: DeliveryAddress {
            street_address: "12 Elm Street".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            postal_code: "62701".to_string(),
        },
        phone_number: "555-0100".to_string(),
        deletion_requested: false,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_cart(owner: UserUuid, product: ProductUuid) -> Cart {
    Cart {
        uuid: CartUuid::new(),
        user_uuid: owner,
        owner: None,
        items: vec![CartItem {
            product_uuid: product,
            quantity: 2,
            price: 15_000,
            product: None,
        }],
        rental_date: date(2026, 12, 24),
        total_price: 30_000,
        delivery_address: None,
        event_notes: None,
        status: CartStatus::Active,
        expires_at: Timestamp::UNIX_EPOCH,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_booking(owner: UserUuid, product: ProductUuid) -> Booking {
    Booking {
        uuid: BookingUuid::new(),
        user_uuid: owner,
        owner: None,
        email: "casey@example.com".to_string(),
        items: vec![BookingItem {
            product_uuid: product,
            quantity: 2,
            price: 15_000,
            product: None,
        }],
        total_price: 30_000,
        rental_date: date(2026, 12, 24),
        delivery_address: "12 Elm Street".to_string(),
        event_notes: None,
        status: BookingStatus::Confirmed,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_promotion(uuid: PromotionUuid) -> PromotionRecord {
    PromotionRecord {
        uuid,
        title: "Summer Sale".to_string(),
        message: "20% off all tents".to_string(),
        image_url: "https://img.example.com/summer.png".to_string(),
        is_active: true,
        created_by: TEST_ADMIN.user,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_testimonial(uuid: TestimonialUuid, author: UserUuid) -> TestimonialRecord {
    TestimonialRecord {
        uuid,
        user_uuid: author,
        name: "Casey".to_string(),
        review: "The castle was the hit of the party.".to_string(),
        rating: 5,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
