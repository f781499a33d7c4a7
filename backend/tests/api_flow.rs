use accounts_backend::{create_router, storage::DbConnection, AppState};
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn setup_app() -> Router {
    let db = DbConnection::in_memory()
        .await
        .expect("Failed to create test database");
    create_router(AppState::from_connection(db))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response: Response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn create_account_fetch_it_and_record_a_payment() {
    let app = setup_app().await;

    let (status, account) = send(
        &app,
        Method::POST,
        "/accounts",
        Some(json!({ "document_number": "12345678" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(account["document_number"], "12345678");
    let account_id = account["account_id"].as_i64().expect("account_id should be an integer");
    assert!(account_id > 0);

    let (status, fetched) = send(&app, Method::GET, &format!("/accounts/{}", account_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["document_number"], "12345678");
    assert_eq!(fetched["account_id"], account_id);

    let (status, transaction) = send(
        &app,
        Method::POST,
        "/transactions",
        Some(json!({ "account_id": account_id, "amount": 1000, "operation_type_id": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(transaction["amount"].as_f64(), Some(1000.0));
    assert_eq!(transaction["account_id"], account_id);
    assert_eq!(transaction["operation_type_id"], 4);
    assert!(transaction["transaction_id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn purchase_is_returned_negative() {
    let app = setup_app().await;

    let (_, account) = send(
        &app,
        Method::POST,
        "/accounts",
        Some(json!({ "document_number": "12345678" })),
    )
    .await;
    let account_id = account["account_id"].as_i64().unwrap();

    let (status, transaction) = send(
        &app,
        Method::POST,
        "/transactions",
        Some(json!({ "account_id": account_id, "amount": 1000, "operation_type_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(transaction["amount"].as_f64(), Some(-1000.0));
}

#[tokio::test]
async fn duplicate_document_number_conflicts() {
    let app = setup_app().await;
    let body = json!({ "document_number": "99999999" });

    let (first, _) = send(&app, Method::POST, "/accounts", Some(body.clone())).await;
    assert_eq!(first, StatusCode::CREATED);

    let (second, error) = send(&app, Method::POST, "/accounts", Some(body)).await;
    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(error["status"], 409);
    assert_eq!(error["message"], "Account with this document number already exists");
}

#[tokio::test]
async fn unknown_account_and_bad_ids() {
    let app = setup_app().await;

    let (status, error) = send(&app, Method::GET, "/accounts/4242", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["message"], "Account not found");

    let (status, error) = send(&app, Method::GET, "/accounts/not-a-number", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "Invalid Operation ID");
}

#[tokio::test]
async fn transaction_for_missing_account_creates_nothing() {
    let db = DbConnection::in_memory().await.unwrap();
    let app = create_router(AppState::from_connection(db.clone()));

    let (status, _) = send(
        &app,
        Method::POST,
        "/transactions",
        Some(json!({ "account_id": 7, "amount": 50, "operation_type_id": 3 })),
    )
    .await;
    assert!(status.is_client_error() || status.is_server_error());

    let row = sqlx::query("SELECT COUNT(*) AS total FROM transactions")
        .fetch_one(db.pool())
        .await
        .unwrap();
    let total: i64 = sqlx::Row::try_get(&row, "total").unwrap();
    assert_eq!(total, 0);
}

#[tokio::test]
async fn invalid_operation_type_is_rejected() {
    let app = setup_app().await;

    let (status, error) = send(
        &app,
        Method::POST,
        "/transactions",
        Some(json!({ "account_id": 1, "amount": 1000, "operation_type_id": 6 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "Invalid request body");
}
