//! HTTP exchange described as plain data.
//!
//! # Design
//! The request builder produces an `HttpRequest` and the response parser
//! consumes an `HttpResponse`; neither touches the network. Only a
//! `Transport` turns one into the other. The gateway accepts a single verb,
//! so requests carry no method field: every `HttpRequest` is a POST.

/// A form POST to the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// The gateway's reply, as returned by a `Transport`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
