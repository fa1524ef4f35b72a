//! Error types for the gateway client.
//!
//! # Design
//! Nothing in this crate aborts the caller's control flow on a failed
//! transaction: `TransactionClient` turns every `GatewayError` into a line in
//! its error list. The `Display` text of each variant is therefore written to
//! be read by an operator, and carries the status or detail needed to act on
//! it.

use thiserror::Error;

/// Errors produced while submitting a transaction or reading the reply.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never completed: DNS, connect, TLS or timeout failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The gateway answered with a non-2xx status.
    #[error("Gateway returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The body did not have the two-row quoted layout.
    #[error("Malformed gateway response: {0}")]
    MalformedResponse(String),
}

impl From<ureq::Error> for GatewayError {
    fn from(err: ureq::Error) -> Self {
        GatewayError::Transport(err.to_string())
    }
}
