//! Client adapter for the Skipjack AuthorizeAPI credit-card gateway.
//!
//! # Overview
//! Callers assemble a [`FieldSet`] of gateway-named parameters, the client
//! fills in the gateway's recommended defaults, rejects requests missing a
//! mandatory field, POSTs the form-encoded body to the production or
//! development endpoint and parses the two-line quoted response into a
//! [`GatewayResponse`].
//!
//! # Design
//! - Request building and response parsing are pure functions over plain data
//!   (`HttpRequest` / `HttpResponse`); only [`Transport`] touches the network.
//! - [`TransactionClient`] is the stateful facade: every failure, whether
//!   validation, transport, decline or gateway error, is appended to an error
//!   list and reported through a boolean.
//! - The auth-code and return-code tables are process-wide constants.

pub mod client;
pub mod codes;
pub mod config;
pub mod error;
pub mod fields;
pub mod http;
pub mod request;
pub mod response;
pub mod transport;

pub use client::TransactionClient;
pub use codes::AuthCode;
pub use config::{Environment, GatewayConfig};
pub use error::GatewayError;
pub use fields::FieldSet;
pub use http::{HttpRequest, HttpResponse};
pub use response::GatewayResponse;
pub use transport::{Transport, UreqTransport};
