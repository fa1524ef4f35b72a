use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_gateway::{app, AUTHORIZE_PATH, DECLINED_ACCOUNT, DECLINE_MESSAGE};
use tower::ServiceExt;

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn form_request(body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(format!("{AUTHORIZE_PATH}?AuthorizeAPI"))
        .header(
            http::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(body.to_string())
        .unwrap()
}

/// Column value from the two-row reply, looked up by header name.
fn column(body: &str, name: &str) -> String {
    let rows: Vec<&str> = body.split("\r\n").collect();
    let header: Vec<&str> = rows[0].split("\",\"").collect();
    let data: Vec<&str> = rows[1].split("\",\"").collect();
    let i = header
        .iter()
        .position(|h| h.trim_matches('"') == name)
        .unwrap();
    data[i].trim_matches('"').to_string()
}

fn order(account: &str, order_number: &str) -> String {
    format!(
        "SerialNumber=000111222333&OrderNumber={order_number}&AccountNumber={account}\
         &Month=12&Year=2030&TransactionAmount=200.00&ItemDescription=Test+Item"
    )
}

// --- authorize ---

#[tokio::test]
async fn approved_order() {
    let resp = app()
        .oneshot(form_request(&order("4445999922225", "1")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[http::header::CONTENT_TYPE],
        "text/plain"
    );
    let body = body_text(resp).await;
    assert_eq!(column(&body, "szIsApproved"), "1");
    assert_eq!(column(&body, "AUTHCODE"), "5");
    assert_eq!(column(&body, "szOrderNumber"), "1");
}

#[tokio::test]
async fn declined_order() {
    let resp = app()
        .oneshot(form_request(&order(DECLINED_ACCOUNT, "1")))
        .await
        .unwrap();

    let body = body_text(resp).await;
    assert_eq!(column(&body, "szIsApproved"), "0");
    assert_eq!(column(&body, "szAuthorizationDeclinedMessage"), DECLINE_MESSAGE);
}

#[tokio::test]
async fn invalid_card_number() {
    let resp = app()
        .oneshot(form_request(&order("12", "1")))
        .await
        .unwrap();

    let body = body_text(resp).await;
    assert_eq!(column(&body, "szReturnCode"), "-35");
}

#[tokio::test]
async fn get_is_not_allowed() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri(AUTHORIZE_PATH)
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// --- ledger shared across requests ---

#[tokio::test]
async fn duplicate_order_number() {
    use tower::Service;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(form_request(&order("4445999922225", "42")))
        .await
        .unwrap();
    let body = body_text(resp).await;
    assert_eq!(column(&body, "szReturnCode"), "1");

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(form_request(&order("4445999922225", "42")))
        .await
        .unwrap();
    let body = body_text(resp).await;
    assert_eq!(column(&body, "szReturnCode"), "-84");
    assert_eq!(column(&body, "szIsApproved"), "0");

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(form_request(&order("4445999922225", "43")))
        .await
        .unwrap();
    let body = body_text(resp).await;
    assert_eq!(column(&body, "szIsApproved"), "1");
}
