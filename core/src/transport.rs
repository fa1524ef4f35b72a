//! Network boundary between request building and response parsing.
//!
//! # Design
//! `Transport` is the only seam that performs I/O. `UreqTransport` is the
//! blocking HTTPS implementation; any `Fn(&HttpRequest) -> Result<..>` is
//! also a transport, which lets tests script the gateway without a socket.

use std::time::Duration;

use crate::error::GatewayError;
use crate::http::{HttpRequest, HttpResponse};

pub trait Transport {
    /// Execute one POST. Non-2xx replies are errors.
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, GatewayError>;
}

impl<F> Transport for F
where
    F: Fn(&HttpRequest) -> Result<HttpResponse, GatewayError>,
{
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, GatewayError> {
        self(request)
    }
}

/// Blocking transport backed by a `ureq` agent.
///
/// ureq's own status-as-error behaviour is disabled so that 4xx/5xx bodies
/// are kept and reported through `GatewayError::HttpStatus`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, GatewayError> {
        let mut builder = self.agent.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let mut response = builder.send(request.body.as_bytes())?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string()?;
        let response = HttpResponse { status, body };
        check_status(response)
    }
}

/// Longest body prefix kept in an `HttpStatus` error, in characters.
pub const MAX_ERROR_BODY_CHARS: usize = 200;

/// Map a non-2xx status to `GatewayError::HttpStatus`, keeping only the start
/// of the body.
pub fn check_status(response: HttpResponse) -> Result<HttpResponse, GatewayError> {
    if response.is_success() {
        return Ok(response);
    }
    Err(GatewayError::HttpStatus {
        status: response.status,
        body: truncate_body(&response.body),
    })
}

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}
