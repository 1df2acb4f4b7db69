//! App Context

use std::sync::Arc;

use jiff::{SignedDuration, Timestamp};
use thiserror::Error;

use crate::{
    auth::{AuthService, PgSessionsRepository, SessionAuthService},
    database,
    domain::{
        bookings::{BookingsManager, BookingsService, PgBookingsRepository},
        carts::{CartsManager, CartsRepository, CartsService, PgCartsRepository},
        inquiries::{InquiriesManager, InquiriesService},
        products::{PgProductsRepository, ProductsManager, ProductsService},
        promotions::{PgPromotionsRepository, PromotionsManager, PromotionsService},
        testimonials::{PgTestimonialsRepository, TestimonialsManager, TestimonialsService},
        users::{PgUsersRepository, UsersManager, UsersService},
    },
    mailer::{HttpMailer, MailerConfig},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

/// Where inquiries are delivered.
#[derive(Debug, Clone)]
pub struct MailSettings {
    pub mailer: MailerConfig,
    pub admin_email: String,
}

/// Runtime settings handed over by the server binary.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub mail: MailSettings,

    /// Lifetime of sessions issued at log-in.
    pub session_ttl: SignedDuration,
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub users: Arc<dyn UsersService>,
    pub carts: Arc<dyn CartsService>,
    pub bookings: Arc<dyn BookingsService>,
    pub promotions: Arc<dyn PromotionsService>,
    pub testimonials: Arc<dyn TestimonialsService>,
    pub inquiries: Arc<dyn InquiriesService>,
    pub auth: Arc<dyn AuthService>,

    /// Raw cart storage, used by the expired-cart sweep.
    pub cart_store: Arc<dyn CartsRepository>,
}

impl AppContext {
    /// Build application context from a database URL, applying pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting or migrating fails.
    pub async fn from_database_url(
        url: &str,
        settings: AppSettings,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        let products = Arc::new(PgProductsRepository::new(pool.clone()));
        let users = Arc::new(PgUsersRepository::new(pool.clone()));
        let carts = Arc::new(PgCartsRepository::new(pool.clone()));
        let bookings = Arc::new(PgBookingsRepository::new(pool.clone()));
        let sessions = Arc::new(PgSessionsRepository::new(pool.clone()));

        Ok(Self {
            products: Arc::new(ProductsManager::new(products.clone())),
            users: Arc::new(UsersManager::new(users.clone())),
            carts: Arc::new(CartsManager::new(
                carts.clone(),
                products.clone(),
                users.clone(),
            )),
            bookings: Arc::new(BookingsManager::new(bookings, products, users.clone())),
            promotions: Arc::new(PromotionsManager::new(Arc::new(
                PgPromotionsRepository::new(pool.clone()),
            ))),
            testimonials: Arc::new(TestimonialsManager::new(Arc::new(
                PgTestimonialsRepository::new(pool),
            ))),
            inquiries: Arc::new(InquiriesManager::new(
                Arc::new(HttpMailer::new(settings.mail.mailer)),
                settings.mail.admin_email,
            )),
            auth: Arc::new(
                SessionAuthService::new(sessions, users).with_ttl(settings.session_ttl),
            ),
            cart_store: carts,
        })
    }

    /// Delete carts whose lifetime has elapsed. Returns the number removed.
    ///
    /// # Errors
    ///
    /// Returns the underlying storage error.
    pub async fn purge_expired_carts(&self) -> Result<u64, sqlx::Error> {
        self.cart_store.purge_expired(Timestamp::now()).await
    }
}
