//! Carts Config

use std::time::Duration;

use clap::Args;

/// Expired-cart sweeper settings.
#[derive(Debug, Args)]
pub struct CartsConfig {
    /// Seconds between expired-cart sweeps
    #[arg(long, env = "CART_PURGE_INTERVAL_SECONDS", default_value_t = 60)]
    pub cart_purge_interval_seconds: u64,
}

impl CartsConfig {
    /// Sweep interval, never shorter than one second.
    #[must_use]
    pub fn purge_interval(&self) -> Duration {
        Duration::from_secs(self.cart_purge_interval_seconds.max(1))
    }
}
