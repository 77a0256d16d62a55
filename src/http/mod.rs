//! HTTP server module.
//!
//! Binds the fixed listen address and runs the accept loop for the router
//! built in [`crate::routes`].

mod server;

pub use server::{bind, serve, start_server, ServerError};
