//! HTTP Config
//!
//! Where the API listens, which browser origin may call it and how long a
//! shutdown waits for in-flight requests.

use std::{
    net::{IpAddr, SocketAddr},
    time::Duration,
};

use clap::Args;
use salvo::http::header::HeaderValue;

/// Browser origin allowed to call the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedOrigin {
    /// `*`: any origin.
    Any,

    /// A single origin such as `http://localhost:3000`.
    Exact(HeaderValue),
}

/// Parse a `CORS_ALLOWED_ORIGIN` value.
///
/// A trailing slash is dropped, browsers never send one in `Origin`.
pub(crate) fn parse_allowed_origin(value: &str) -> Result<AllowedOrigin, String> {
    let origin = value.trim().trim_end_matches('/');

    if origin == "*" {
        return Ok(AllowedOrigin::Any);
    }

    if !(origin.starts_with("http://") || origin.starts_with("https://")) {
        return Err(format!("`{origin}` is not an http(s) origin"));
    }

    HeaderValue::from_str(origin)
        .map(AllowedOrigin::Exact)
        .map_err(|error| format!("`{origin}` is not a valid origin: {error}"))
}

/// HTTP listener settings.
#[derive(Debug, Args)]
pub struct HttpConfig {
    /// Address to bind
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to bind
    #[arg(short, long, env = "SERVER_PORT", default_value_t = 8698)]
    pub port: u16,

    /// Origin allowed by CORS, `*` for any
    #[arg(
        long,
        env = "CORS_ALLOWED_ORIGIN",
        default_value = "http://localhost:3000",
        value_parser = parse_allowed_origin
    )]
    pub cors_allowed_origin: AllowedOrigin,

    /// Seconds to wait for in-flight requests on shutdown, 0 waits forever
    #[arg(long, env = "SHUTDOWN_GRACE_SECS", default_value_t = 30)]
    pub shutdown_grace_secs: u64,
}

impl HttpConfig {
    /// Address the listener binds to.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Drain limit for graceful shutdown, `None` when unlimited.
    #[must_use]
    pub fn shutdown_grace(&self) -> Option<Duration> {
        (self.shutdown_grace_secs > 0).then(|| Duration::from_secs(self.shutdown_grace_secs))
    }
}
