//! Graceful shutdown on process signals

use std::{fmt, io, time::Duration};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
#[error("failed to install {signal} handler: {source}")]
pub(crate) struct ShutdownSignalError {
    signal: ShutdownSignal,
    #[source]
    source: io::Error,
}

/// Signal that asked the server to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Interrupt => "SIGINT",
            Self::Terminate => "SIGTERM",
        })
    }
}

impl ShutdownSignal {
    fn install_failed(self, source: io::Error) -> ShutdownSignalError {
        ShutdownSignalError {
            signal: self,
            source,
        }
    }
}

async fn interrupt() -> Result<ShutdownSignal, ShutdownSignalError> {
    signal::ctrl_c()
        .await
        .map_err(|source| ShutdownSignal::Interrupt.install_failed(source))?;

    Ok(ShutdownSignal::Interrupt)
}

#[cfg(unix)]
async fn terminate() -> Result<ShutdownSignal, ShutdownSignalError> {
    signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(|source| ShutdownSignal::Terminate.install_failed(source))?
        .recv()
        .await;

    Ok(ShutdownSignal::Terminate)
}

#[cfg(windows)]
async fn terminate() -> Result<ShutdownSignal, ShutdownSignalError> {
    signal::windows::ctrl_close()
        .map_err(|source| ShutdownSignal::Terminate.install_failed(source))?
        .recv()
        .await;

    Ok(ShutdownSignal::Terminate)
}

/// Wait for SIGINT or SIGTERM, then give in-flight requests `grace` to drain.
pub(crate) async fn listen(handle: ServerHandle, grace: Duration) -> Result<(), ShutdownSignalError> {
    let signal = tokio::select! {
        signal = interrupt() => signal?,
        signal = terminate() => signal?,
    };

    info!(
        %signal,
        grace_seconds = grace.as_secs(),
        "stopping rentals api, draining in-flight requests"
    );

    handle.stop_graceful(Some(grace));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_errors_name_the_signal() {
        let error = ShutdownSignal::Terminate.install_failed(io::Error::other("no signal driver"));

        assert_eq!(
            error.to_string(),
            "failed to install SIGTERM handler: no signal driver"
        );
    }
}
