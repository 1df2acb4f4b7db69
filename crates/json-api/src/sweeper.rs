//! Expired Cart Sweeper
//!
//! Reads already hide expired carts; the sweeper removes the rows.

use std::time::Duration;

use tokio::{
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, error, info};

use rentals_app::context::AppContext;

use crate::observability;

/// Purge expired carts once. Returns the number removed, zero on failure.
pub(crate) async fn sweep(app: &AppContext) -> u64 {
    match app.purge_expired_carts().await {
        Ok(0) => {
            debug!("no expired carts");

            0
        }
        Ok(purged) => {
            info!(purged, "purged expired carts");
            observability::record_carts_purged(purged);

            purged
        }
        Err(source) => {
            error!("failed to purge expired carts: {source}");

            0
        }
    }
}

/// Run [`sweep`] every `period` until the runtime shuts down.
pub(crate) fn spawn(app: AppContext, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = time::interval(period);

        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            sweep(&app).await;
        }
    })
}
