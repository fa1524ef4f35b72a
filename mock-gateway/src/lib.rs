//! In-process stand-in for the gateway's AuthorizeAPI endpoint.
//!
//! Accepts the same form-encoded POST as the real service and answers in its
//! two-row quoted format. Outcomes are driven by the submitted fields so
//! tests can reach every branch of the client:
//!
//! | input                                   | reply                   |
//! |-----------------------------------------|-------------------------|
//! | `SerialNumber` not 12 characters        | return code -39         |
//! | `AccountNumber` not 13-19 digits        | return code -35         |
//! | `Month` outside 1-12                    | return code -53         |
//! | `OrderNumber` already processed         | return code -84         |
//! | `AccountNumber` == [`DECLINED_ACCOUNT`] | declined, "Card Declined" |
//! | anything else                           | approved, `AUTHCODE` 5  |

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use axum::{extract::State, http::header, routing::post, Form, Router};
use tokio::{net::TcpListener, sync::RwLock};

pub const AUTHORIZE_PATH: &str = "/scripts/evolvcc.dll";
pub const DECLINED_ACCOUNT: &str = "4000000000000002";
pub const DECLINE_MESSAGE: &str = "Card Declined";

const COLUMNS: [&str; 14] = [
    "AUTHCODE",
    "szSerialNumber",
    "szTransactionAmount",
    "szAuthorizationDeclinedMessage",
    "szAVSResponseCode",
    "szAVSResponseMessage",
    "szOrderNumber",
    "szAuthorizationResponseCode",
    "szIsApproved",
    "szCVV2ResponseCode",
    "szCVV2ResponseMessage",
    "szReturnCode",
    "szTransactionFileName",
    "szCAVVResponseCode",
];

/// Order numbers the gateway has already processed.
pub type Ledger = Arc<RwLock<HashSet<String>>>;

pub fn app() -> Router {
    let ledger: Ledger = Arc::new(RwLock::new(HashSet::new()));
    Router::new()
        .route(AUTHORIZE_PATH, post(authorize))
        .with_state(ledger)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn authorize(
    State(ledger): State<Ledger>,
    Form(form): Form<HashMap<String, String>>,
) -> ([(header::HeaderName, &'static str); 1], String) {
    let mut seen = ledger.write().await;
    let reply = decide(&form, &mut seen);
    tracing::info!(
        order = ?reply.get("szOrderNumber"),
        approved = ?reply.get("szIsApproved"),
        return_code = ?reply.get("szReturnCode"),
        "authorization processed"
    );
    ([(header::CONTENT_TYPE, "text/plain")], render(&reply))
}

/// Apply the mock's rules to one submission, recording accepted order numbers.
pub fn decide(
    form: &HashMap<String, String>,
    seen: &mut HashSet<String>,
) -> HashMap<&'static str, String> {
    let field = |name: &str| form.get(name).map(String::as_str).unwrap_or_default();
    let mut reply: HashMap<&'static str, String> =
        COLUMNS.iter().map(|column| (*column, String::new())).collect();
    reply.insert("szSerialNumber", field("SerialNumber").to_string());
    reply.insert("szTransactionAmount", field("TransactionAmount").to_string());
    reply.insert("szOrderNumber", field("OrderNumber").to_string());
    reply.insert("szIsApproved", "0".to_string());

    let account = field("AccountNumber");
    let return_code = if field("SerialNumber").len() != 12 {
        "-39"
    } else if !(13..=19).contains(&account.len()) || !account.bytes().all(|b| b.is_ascii_digit()) {
        "-35"
    } else if !field("Month").parse::<u32>().is_ok_and(|m| (1..=12).contains(&m)) {
        "-53"
    } else if !seen.insert(field("OrderNumber").to_string()) {
        "-84"
    } else {
        "1"
    };
    reply.insert("szReturnCode", return_code.to_string());
    if return_code != "1" {
        return reply;
    }

    if account == DECLINED_ACCOUNT {
        reply.insert("szAuthorizationDeclinedMessage", DECLINE_MESSAGE.to_string());
    } else {
        reply.insert("AUTHCODE", "5".to_string());
        reply.insert("szIsApproved", "1".to_string());
        reply.insert("szAuthorizationResponseCode", "TAS123".to_string());
        reply.insert("szAVSResponseCode", "Y".to_string());
        reply.insert("szAVSResponseMessage", "Street Match, Zip Match".to_string());
        reply.insert("szCVV2ResponseCode", "M".to_string());
        reply.insert("szCVV2ResponseMessage", "Match".to_string());
    }
    reply
}

/// Header row and data row, each a quoted comma-joined list, CRLF terminated.
pub fn render(reply: &HashMap<&'static str, String>) -> String {
    let quote = |value: &str| format!("\"{value}\"");
    let header: Vec<String> = COLUMNS.iter().map(|column| quote(*column)).collect();
    let data: Vec<String> = COLUMNS
        .iter()
        .map(|column| quote(reply.get(column).map(String::as_str).unwrap_or_default()))
        .collect();
    format!("{}\r\n{}\r\n", header.join(","), data.join(","))
}
