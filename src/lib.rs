//! healthcheck-server: a single-route HTTP liveness endpoint.
//!
//! Answers `GET /_health` with `200 healthy\n` on `0.0.0.0:8080` for
//! orchestrator probes. Everything else gets the router's default 404/405.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
