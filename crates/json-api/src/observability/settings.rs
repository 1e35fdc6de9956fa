//! Request logging settings shared with the `request_logging` hoop.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::observability::LoggingConfig;

static SLOW_REQUEST_THRESHOLD_MS: AtomicU64 = AtomicU64::new(1_000);

pub(super) fn apply(logging: &LoggingConfig) {
    SLOW_REQUEST_THRESHOLD_MS.store(logging.slow_request_threshold_ms, Ordering::Relaxed);
}

/// Requests slower than this are logged as `slow request detected`.
pub(super) fn slow_request_threshold_ms() -> u64 {
    SLOW_REQUEST_THRESHOLD_MS.load(Ordering::Relaxed)
}
