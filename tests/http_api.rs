mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use food_order_api::{entity::sea_orm_active_enums::OrderStatus, routes::create_api_router, state::AppState};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app(state: AppState) -> Router {
    Router::new().nest("/api", create_api_router()).with_state(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?,
        None => request.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, json))
}

#[tokio::test]
async fn checkout_then_pay_over_http() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    common::seed_catalog(&state).await?;
    let app = app(state);

    let (status, menu) = send(&app, Method::GET, "/api/restaurants/3/menu", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(menu.as_array().map(Vec::len), Some(2));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/orders",
        Some(json!({
            "userId": 1,
            "restaurantId": 3,
            "items": [{ "menuItemId": 7, "quantity": 2 }],
            "deliveryType": "Pickup",
            "totalAmount": 240
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert!(body["message"].is_string());
    let order_id = body["orderId"].as_i64().expect("orderId");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/payments",
        Some(json!({
            "userId": 1,
            "orderId": order_id,
            "amount": 240,
            "method": "Credit Card"
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let (status, body) = send(&app, Method::GET, &format!("/api/orders/{order_id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["order"]["status"], json!("Pending"));
    assert_eq!(body["items"][0]["menuItemId"], json!(7));
    assert_eq!(body["items"][0]["quantity"], json!(2));

    let (status, body) = send(&app, Method::GET, &format!("/api/orders/{order_id}/payments"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"][0]["method"], json!("CreditCard"));

    Ok(())
}

#[tokio::test]
async fn missing_fields_use_the_failure_envelope() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    common::seed_catalog(&state).await?;
    let app = app(state);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/orders",
        Some(json!({ "userId": 1, "restaurantId": 3, "items": [], "deliveryType": "Delivery", "totalAmount": 10 })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].is_string());
    assert!(body["details"].as_str().unwrap_or_default().contains("items"));

    let (status, body) = send(&app, Method::POST, "/api/payments", Some(json!({ "userId": 1 }))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));

    let (status, body) = send(&app, Method::GET, "/api/orders/12345", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    Ok(())
}

#[tokio::test]
async fn malformed_bodies_use_the_failure_envelope() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    common::seed_catalog(&state).await?;
    common::create_order(&state, 55, 1, 3, OrderStatus::Pending).await?;
    let app = app(state);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/orders",
        Some(json!({
            "userId": 1,
            "restaurantId": 3,
            "items": [{ "menuItemId": 7, "quantity": 1 }],
            "deliveryType": "Express",
            "totalAmount": 120
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].is_string());
    assert!(body["details"].as_str().unwrap_or_default().contains("deliveryType"));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/payments",
        Some(json!({ "userId": 1, "orderId": 55, "amount": 120, "method": "Cash" })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["details"].as_str().unwrap_or_default().contains("method"));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/orders",
        Some(json!({ "userId": "one", "restaurantId": 3 })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/admin/orders/55/status",
        Some(json!({ "status": "Shipped" })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/payments",
        Some(json!({ "userId": 1, "orderId": 55, "amount": 0, "method": "Wallet" })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"], json!("amount must be positive"));
    Ok(())
}

#[tokio::test]
async fn admin_queue_and_guarded_status_updates() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    common::seed_catalog(&state).await?;
    common::create_order(&state, 55, 1, 3, OrderStatus::Pending).await?;
    let app = app(state);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/admin/orders/55/status",
        Some(json!({ "status": "Completed" })),
    )
    .await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], json!(false));

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/admin/orders/55/status",
        Some(json!({ "status": "Processing" })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["order"]["status"], json!("Processing"));

    let (status, queue) = send(&app, Method::GET, "/api/admin/orders/3?status=Processing", None).await?;
    assert_eq!(status, StatusCode::OK);
    let queue = queue.as_array().cloned().unwrap_or_default();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0]["orderId"], json!(55));
    assert_eq!(queue[0]["allowedTransitions"], json!(["Completed", "Cancelled"]));

    let (status, queue) = send(&app, Method::GET, "/api/admin/orders/3?status=Pending", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(queue, json!([]));
    Ok(())
}
