//! The `/_health` liveness handler.
//!
//! Answering at all is the signal: if the process can accept a connection and
//! run this handler, it is alive. No dependency is checked.

use crate::config::HEALTH_BODY;

/// Health check handler.
///
/// Returns `healthy\n` as plain text. Nothing about the request is inspected and
/// no state is touched, so every call produces the same response.
pub async fn health() -> &'static str {
    HEALTH_BODY
}
