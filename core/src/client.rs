//! Stateful transaction facade over the gateway.
//!
//! # Design
//! `TransactionClient` owns one in-flight transaction: the caller's fields and
//! a `TransactionResult` holding the parsed reply and the accumulated error
//! list. Every failure (missing field, transport error, decline, gateway
//! return code) becomes a line in that list; the boolean returned by
//! `can_submit`, `process` and `check_for_errors` is the only success signal.
//!
//! `reset` throws the transaction away and rebuilds it from the client's
//! configuration, so one client can run a batch sequentially. The pieces that
//! do the work (`FieldSet::complete_required`, `submit`,
//! `GatewayResponse::parse`) are stateless and usable on their own.

use tracing::{debug, instrument, warn};

use crate::codes::AuthCode;
use crate::config::{Environment, GatewayConfig};
use crate::error::GatewayError;
use crate::fields::FieldSet;
use crate::request::build_request;
use crate::response::GatewayResponse;
use crate::transport::{Transport, UreqTransport};

/// Outcome of one transaction: the gateway's reply, if any, and every error
/// gathered along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionResult {
    response: Option<GatewayResponse>,
    errors: Vec<String>,
}

impl TransactionResult {
    pub fn response(&self) -> Option<&GatewayResponse> {
        self.response.as_ref()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_approved(&self) -> bool {
        self.response.as_ref().is_some_and(GatewayResponse::is_approved)
    }
}

/// POST `fields` to `endpoint` and parse the reply.
///
/// Does not validate: callers run `FieldSet::complete_required` first.
pub fn submit<T: Transport>(
    transport: &T,
    endpoint: &str,
    fields: &FieldSet,
) -> Result<GatewayResponse, GatewayError> {
    let request = build_request(endpoint, fields);
    debug!(fields = ?fields.names(), "submitting transaction");
    let response = transport.send(&request)?;
    GatewayResponse::parse(&response.body)
}

pub struct TransactionClient<T = UreqTransport> {
    config: GatewayConfig,
    transport: T,
    fields: FieldSet,
    result: TransactionResult,
}

impl TransactionClient<UreqTransport> {
    pub fn new(config: GatewayConfig) -> Self {
        let transport = UreqTransport::new(config.timeout());
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> TransactionClient<T> {
    pub fn with_transport(config: GatewayConfig, transport: T) -> Self {
        let fields =
            FieldSet::with_credentials(&config.serial_number, &config.developer_serial_number);
        Self {
            config,
            transport,
            fields,
            result: TransactionResult::default(),
        }
    }

    /// `true` posts to the development endpoint, `false` to production.
    pub fn set_developer(&mut self, developer: bool) {
        self.config.environment = Environment::from_developer_flag(developer);
    }

    pub fn endpoint(&self) -> &str {
        self.config.environment.endpoint()
    }

    pub fn add_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.add_field(name, value);
    }

    pub fn add_fields<I, K, V>(&mut self, fields: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.fields.add_fields(fields);
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Fill gateway defaults, then check every required field is present.
    /// Missing fields are appended to the error list.
    pub fn can_submit(&mut self) -> bool {
        match self.fields.complete_required() {
            Ok(()) => true,
            Err(missing) => {
                warn!(missing = missing.len(), "required fields missing");
                self.result.errors.extend(missing);
                false
            }
        }
    }

    /// Validate, submit and parse. Returns `true` once a reply has been
    /// parsed, whether or not the charge was approved.
    #[instrument(skip(self), fields(endpoint = %self.config.environment.endpoint()))]
    pub fn process(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.result.response = None;
        match submit(&self.transport, self.config.environment.endpoint(), &self.fields) {
            Ok(response) => {
                debug!(approved = response.is_approved(), "gateway replied");
                self.result.response = Some(response);
                true
            }
            Err(err) => {
                warn!(error = %err, "transaction submission failed");
                self.result.errors.push(err.to_string());
                false
            }
        }
    }

    /// Record why the transaction was not approved. Returns `true` and leaves
    /// the error list untouched when it was.
    pub fn check_for_errors(&mut self) -> bool {
        let reason = match &self.result.response {
            Some(response) => response.failure_reason(),
            None => Some("No gateway response received".to_string()),
        };
        match reason {
            None => true,
            Some(reason) => {
                self.result.errors.push(reason);
                false
            }
        }
    }

    pub fn is_approved(&self) -> bool {
        self.result.is_approved()
    }

    pub fn is_card_declined(&self) -> bool {
        self.result
            .response
            .as_ref()
            .is_some_and(GatewayResponse::is_card_declined)
    }

    pub fn auth_code(&self) -> Option<AuthCode> {
        self.result.response.as_ref().and_then(GatewayResponse::auth_code)
    }

    pub fn response(&self) -> Option<&GatewayResponse> {
        self.result.response()
    }

    pub fn result(&self) -> &TransactionResult {
        &self.result
    }

    pub fn errors_exist(&self) -> bool {
        !self.result.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        self.result.errors()
    }

    /// Discard the current transaction and start a new one with only the
    /// configured credentials.
    pub fn reset(&mut self) {
        self.fields = FieldSet::with_credentials(
            &self.config.serial_number,
            &self.config.developer_serial_number,
        );
        self.result = TransactionResult::default();
    }
}
