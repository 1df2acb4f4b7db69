//! Auth Config

use clap::Args;
use jiff::SignedDuration;

/// Session settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Lifetime of a session issued at log-in, in hours
    #[arg(long, env = "SESSION_TTL_HOURS", default_value_t = 168)]
    pub session_ttl_hours: i64,
}

impl AuthConfig {
    /// Session lifetime as a duration.
    #[must_use]
    pub fn session_ttl(&self) -> SignedDuration {
        SignedDuration::from_hours(self.session_ttl_hours)
    }
}
