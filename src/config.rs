//! Fixed settings and constants.
//!
//! The service has no configuration file: the listen address, the health route
//! and its response are compile-time constants. Only logging can be adjusted at
//! runtime, through the CLI or `RUST_LOG`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

// =============================================================================
// Listener
// =============================================================================

/// Listen on all IPv4 interfaces
pub const LISTEN_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Port probed by orchestrators
pub const LISTEN_PORT: u16 = 8080;

/// Socket address the server binds at startup.
pub fn listen_addr() -> SocketAddr {
    SocketAddr::new(LISTEN_HOST, LISTEN_PORT)
}

// =============================================================================
// Routes and Responses
// =============================================================================

/// Path of the liveness route
pub const HEALTH_PATH: &str = "/_health";

/// Body returned by the liveness route
pub const HEALTH_BODY: &str = "healthy\n";

/// Body returned for paths with no registered route
pub const NOT_FOUND_BODY: &str = "404 page not found\n";

/// Liveness answers must never be served from a cache
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when neither `--log-level` nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "healthcheck_server=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";
