//! Form encoding of a `FieldSet` into the gateway's POST request.

use url::form_urlencoded;

use crate::fields::FieldSet;
use crate::http::HttpRequest;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// `name=value` pairs joined by `&`, in field order.
///
/// Values are form-urlencoded (space becomes `+`). Names go out as-is: the
/// gateway's field names are plain ASCII identifiers.
pub fn encode_fields(fields: &FieldSet) -> String {
    fields
        .iter()
        .map(|(name, value)| {
            let encoded: String = form_urlencoded::byte_serialize(value.as_bytes()).collect();
            format!("{name}={encoded}")
        })
        .collect::<Vec<_>>()
        .join("&")
}

pub fn build_request(endpoint: &str, fields: &FieldSet) -> HttpRequest {
    HttpRequest {
        url: endpoint.to_string(),
        headers: vec![("content-type".to_string(), FORM_CONTENT_TYPE.to_string())],
        body: encode_fields(fields),
    }
}
