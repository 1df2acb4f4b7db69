//! Test context for service-level tests.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::{
    auth::{Identity, SessionAuthService, hash_password},
    domain::{
        bookings::BookingsManager,
        carts::CartsManager,
        products::ProductsManager,
        promotions::PromotionsManager,
        testimonials::TestimonialsManager,
        users::{UsersManager, records::Role},
    },
    test::{helpers::new_user_record, memory::MemoryStore},
};

/// Password shared by the seeded accounts.
pub(crate) const TEST_PASSWORD: &str = "password123";

/// Argon2 is slow; hash the shared password once per test binary.
pub(crate) static TEST_PASSWORD_HASH: Lazy<String> =
    Lazy::new(|| hash_password(TEST_PASSWORD).expect("Failed to hash test password"));

/// Services wired over one in-memory store, seeded with an admin and a customer.
pub(crate) struct TestContext {
    pub store: Arc<MemoryStore>,
    pub products: ProductsManager,
    pub users: UsersManager,
    pub carts: CartsManager,
    pub bookings: BookingsManager,
    pub promotions: PromotionsManager,
    pub testimonials: TestimonialsManager,
    pub auth: SessionAuthService,
    pub admin: Identity,
    pub customer: Identity,
}

impl TestContext {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::default());

        let admin = store.insert_user(&new_user_record("admin", "Alex", Role::Admin));
        let customer = store.insert_user(&new_user_record("customer", "Casey", Role::User));

        Self {
            products: ProductsManager::new(store.clone()),
            users: UsersManager::new(store.clone()),
            carts: CartsManager::new(store.clone(), store.clone(), store.clone()),
            bookings: BookingsManager::new(store.clone(), store.clone(), store.clone()),
            promotions: PromotionsManager::new(store.clone()),
            testimonials: TestimonialsManager::new(store.clone()),
            auth: SessionAuthService::new(store.clone(), store.clone()),
            admin: Identity::admin(admin.uuid),
            customer: Identity::user(customer.uuid),
            store,
        }
    }
}
