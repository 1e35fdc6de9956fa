//! Graceful Shutdown
//!
//! Waits for Ctrl+C or a terminate request, then stops accepting connections
//! and drains in-flight pricing requests for up to the configured grace period.

use std::{fmt, io, time::Duration};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install {signal} handler: {source}")]
    Install {
        signal: ShutdownSignal,
        #[source]
        source: io::Error,
    },
}

/// Which request to stop arrived first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interrupt => f.write_str("Ctrl+C"),
            Self::Terminate => f.write_str("terminate"),
        }
    }
}

fn install_failed(signal: ShutdownSignal) -> impl FnOnce(io::Error) -> ShutdownSignalError {
    move |source| ShutdownSignalError::Install { signal, source }
}

async fn interrupt() -> Result<ShutdownSignal, ShutdownSignalError> {
    signal::ctrl_c()
        .await
        .map_err(install_failed(ShutdownSignal::Interrupt))?;

    Ok(ShutdownSignal::Interrupt)
}

#[cfg(unix)]
async fn terminate() -> Result<ShutdownSignal, ShutdownSignalError> {
    signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(install_failed(ShutdownSignal::Terminate))?
        .recv()
        .await;

    Ok(ShutdownSignal::Terminate)
}

#[cfg(windows)]
async fn terminate() -> Result<ShutdownSignal, ShutdownSignalError> {
    signal::windows::ctrl_close()
        .map_err(install_failed(ShutdownSignal::Terminate))?
        .recv()
        .await;

    Ok(ShutdownSignal::Terminate)
}

async fn wait_for_signal() -> Result<ShutdownSignal, ShutdownSignalError> {
    tokio::select! {
        signal = interrupt() => signal,
        signal = terminate() => signal,
    }
}

/// Stop `handle` once a shutdown signal arrives.
///
/// `grace` of `None` waits for every in-flight request to finish.
pub(crate) async fn listen(
    handle: ServerHandle,
    grace: Option<Duration>,
) -> Result<ShutdownSignal, ShutdownSignalError> {
    let signal = wait_for_signal().await?;

    match grace {
        Some(grace) => info!(%signal, grace_secs = grace.as_secs(), "draining requests before shutdown"),
        None => warn!(%signal, "draining requests before shutdown, no grace limit set"),
    }

    handle.stop_graceful(grace);

    Ok(signal)
}
