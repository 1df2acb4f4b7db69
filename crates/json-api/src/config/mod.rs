//! Server configuration module

use clap::Parser;

use crate::config::{
    auth::AuthConfig,
    carts::CartsConfig,
    db::DatabaseConfig,
    mail::MailConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ListenerConfig,
};

pub(crate) mod auth;
pub(crate) mod carts;
pub(crate) mod db;
pub(crate) mod mail;
pub(crate) mod observability;
pub(crate) mod server;

/// Rentals JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "rentals-json", about = "Rentals JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// HTTP listener settings.
    #[command(flatten)]
    pub server: ListenerConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Observability (traces/metrics) settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Session settings.
    #[command(flatten)]
    pub auth: AuthConfig,

    /// Outbound mail settings.
    #[command(flatten)]
    pub mail: MailConfig,

    /// Cart sweeper settings.
    #[command(flatten)]
    pub carts: CartsConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const REQUIRED: [&str; 7] = [
        "rentals-json",
        "--database-url",
        "postgres://localhost/rentals",
        "--mail-relay-url",
        "http://localhost:8025/api/send",
        "--admin-email",
        "admin@example.com",
    ];

    #[test]
    fn defaults_apply_when_only_required_flags_are_given() -> TestResult {
        let config = ServerConfig::try_parse_from(REQUIRED)?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
        assert_eq!(config.server.shutdown_grace(), std::time::Duration::from_secs(30));
        assert_eq!(config.auth.session_ttl_hours, 168);
        assert_eq!(config.carts.cart_purge_interval_seconds, 60);
        assert_eq!(config.mail.mail_from, "no-reply@localhost");

        Ok(())
    }

    #[test]
    fn missing_admin_email_is_rejected() {
        let result = ServerConfig::try_parse_from(&REQUIRED[..5]);

        assert!(result.is_err(), "admin email is required");
    }
}
