//! Parser for the gateway's two-row quoted reply.
//!
//! # Format
//! The AuthorizeAPI answers with a header row and a data row separated by a
//! carriage return. Each row is a run of double-quoted values joined by
//! `","`:
//!
//! ```text
//! "AUTHCODE","szSerialNumber","szIsApproved"\r"5","000111222333","1"
//! ```
//!
//! This is not CSV: values are never escaped, so the rows are split on the
//! literal `","` and then every piece has stray `\r`, `\n` and `"` characters
//! removed. Header and data columns are paired by index.

use std::collections::HashMap;

use crate::codes::{return_code_description, AuthCode};
use crate::error::GatewayError;

const ROW_SEPARATOR: char = '\r';
const COLUMN_DELIMITER: &str = "\",\"";

pub const IS_APPROVED: &str = "szIsApproved";
pub const DECLINED_MESSAGE: &str = "szAuthorizationDeclinedMessage";
pub const RETURN_CODE: &str = "szReturnCode";
pub const AUTH_CODE: &str = "AUTHCODE";

/// Column name to value mapping returned by the gateway for one transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayResponse {
    fields: HashMap<String, String>,
}

impl GatewayResponse {
    pub fn parse(body: &str) -> Result<Self, GatewayError> {
        let mut rows = body.split(ROW_SEPARATOR);
        let header_row = rows.next().unwrap_or_default();
        let data_row = rows
            .next()
            .ok_or_else(|| GatewayError::MalformedResponse("missing data row".to_string()))?;

        let header: Vec<String> = header_row.split(COLUMN_DELIMITER).map(clean).collect();
        if header.iter().all(String::is_empty) {
            return Err(GatewayError::MalformedResponse("empty header row".to_string()));
        }
        let data: Vec<String> = data_row.split(COLUMN_DELIMITER).map(clean).collect();

        let fields = header
            .into_iter()
            .enumerate()
            .filter(|(_, name)| !name.is_empty())
            .map(|(i, name)| {
                let value = data.get(i).cloned().unwrap_or_default();
                (name, value)
            })
            .collect();
        Ok(Self { fields })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn fields(&self) -> &HashMap<String, String> {
        &self.fields
    }

    pub fn is_approved(&self) -> bool {
        self.get(IS_APPROVED) == Some("1")
    }

    pub fn declined_message(&self) -> Option<&str> {
        self.get(DECLINED_MESSAGE).filter(|message| !message.is_empty())
    }

    pub fn is_card_declined(&self) -> bool {
        self.declined_message().is_some()
    }

    pub fn return_code(&self) -> Option<i32> {
        self.get(RETURN_CODE).and_then(|code| code.trim().parse().ok())
    }

    /// `None` when the column is absent or not an integer.
    pub fn auth_code(&self) -> Option<AuthCode> {
        self.get(AUTH_CODE)
            .and_then(|code| code.trim().parse().ok())
            .map(AuthCode::new)
    }

    /// Why the transaction was not approved, or `None` if it was.
    ///
    /// A decline message from the issuer takes precedence over the return
    /// code. Return codes missing from the gateway's table produce an
    /// "Unknown return code" message instead of an empty string.
    pub fn failure_reason(&self) -> Option<String> {
        if self.is_approved() {
            return None;
        }
        if let Some(message) = self.declined_message() {
            return Some(message.to_string());
        }
        let reason = match self.get(RETURN_CODE) {
            None => "Gateway response did not include a return code".to_string(),
            Some(raw) => match raw.trim().parse::<i32>() {
                Ok(code) => return_code_description(code)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Unknown return code: {code}")),
                Err(_) => format!("Unknown return code: {raw}"),
            },
        };
        Some(reason)
    }
}

fn clean(piece: &str) -> String {
    piece
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n' | '"'))
        .collect()
}
