//! End-to-end transactions against the mock gateway over real HTTP.
//!
//! # Design
//! Starts the mock gateway on a random port, points a `TransactionClient` at
//! it through `Environment::Custom` and runs every outcome the client
//! distinguishes: approval, decline, gateway return code, validation failure
//! and transport failure.

use std::net::SocketAddr;

use skipjack_core::{Environment, GatewayConfig, TransactionClient};

/// Start the mock gateway on a random port and return its address.
fn spawn_gateway() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_gateway::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn client_for(addr: SocketAddr) -> TransactionClient {
    let config = GatewayConfig {
        environment: Environment::Custom(format!(
            "http://{addr}{}?AuthorizeAPI",
            mock_gateway::AUTHORIZE_PATH
        )),
        timeout_secs: 5,
        ..GatewayConfig::new("000111222333", "444555666777")
    };
    TransactionClient::new(config)
}

fn order(order_number: &str, account: &str) -> Vec<(&'static str, String)> {
    vec![
        ("OrderNumber", order_number.to_string()),
        ("ItemNumber", "i5".to_string()),
        ("ItemDescription", "Test Item & Co".to_string()),
        ("ItemCost", "5.50".to_string()),
        ("Quantity", "1".to_string()),
        ("Taxable", "0".to_string()),
        ("AccountNumber", account.to_string()),
        ("Month", "12".to_string()),
        ("Year", "2030".to_string()),
        ("TransactionAmount", "200.00".to_string()),
        ("Submit", "Submit".to_string()),
    ]
}

#[test]
fn batch_through_one_client() {
    let addr = spawn_gateway();
    let mut client = client_for(addr);

    // Step 1: approved charge.
    client.add_fields(order("1001", "4445999922225"));
    assert!(client.process(), "errors: {:?}", client.errors());
    assert!(client.is_approved());
    assert!(client.check_for_errors());
    let auth = client.auth_code().unwrap();
    assert_eq!((auth.code, auth.description), (5, Some("Issuer Aproval")));
    let response = client.response().unwrap();
    assert_eq!(response.get("szOrderNumber"), Some("1001"));
    assert_eq!(response.get("szTransactionAmount"), Some("200.00"));

    // Step 2: declined card.
    client.reset();
    client.add_fields(order("1002", mock_gateway::DECLINED_ACCOUNT));
    assert!(client.process());
    assert!(!client.is_approved());
    assert!(client.is_card_declined());
    assert!(!client.check_for_errors());
    assert_eq!(client.errors(), [mock_gateway::DECLINE_MESSAGE]);

    // Step 3: same order number as step 1 is a gateway error, not a decline.
    client.reset();
    client.add_fields(order("1001", "4445999922225"));
    assert!(client.process());
    assert!(!client.is_card_declined());
    assert!(!client.check_for_errors());
    assert_eq!(client.errors(), ["Pos error duplicate ordernumber"]);

    // Step 4: missing order number never reaches the gateway.
    client.reset();
    client.add_fields(order("", "4445999922225"));
    assert!(!client.process());
    assert_eq!(client.errors(), ["Required field not found: OrderNumber"]);
    assert!(client.response().is_none());
}

#[test]
fn bad_serial_number_is_reported_by_gateway() {
    let addr = spawn_gateway();
    let config = GatewayConfig {
        environment: Environment::Custom(format!("http://{addr}{}", mock_gateway::AUTHORIZE_PATH)),
        ..GatewayConfig::new("12345", "444555666777")
    };
    let mut client = TransactionClient::new(config);
    client.add_fields(order("2001", "4445999922225"));

    assert!(client.process());
    assert!(!client.check_for_errors());
    assert_eq!(client.errors(), ["Error length serial number"]);
}

#[test]
fn unknown_path_is_an_http_error() {
    let addr = spawn_gateway();
    let config = GatewayConfig {
        environment: Environment::Custom(format!("http://{addr}/nowhere")),
        ..GatewayConfig::new("000111222333", "444555666777")
    };
    let mut client = TransactionClient::new(config);
    client.add_fields(order("3001", "4445999922225"));

    assert!(!client.process());
    assert!(client.errors()[0].starts_with("Gateway returned HTTP 404"));
}

#[test]
fn connection_refused_is_a_transport_error() {
    // Bind then drop so the port is known to be closed.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let mut client = client_for(addr);
    client.add_fields(order("4001", "4445999922225"));

    assert!(!client.process());
    assert_eq!(client.errors().len(), 1);
    assert!(client.errors()[0].starts_with("Transport error:"));
    assert!(!client.is_approved());
}
