use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    dto::{
        orders::{OrderWithItems, PlaceOrderRequest, PlaceOrderResponse},
        payments::PaymentList,
    },
    error::{AppResult, ErrorBody},
    extract::ApiJson,
    response::ApiResponse,
    services::{order_service, payment_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(place_order))
        .route("/{id}", get(get_order))
        .route("/{id}/payments", get(list_order_payments))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = PlaceOrderRequest,
    responses(
        (status = 200, description = "Order and its items persisted", body = ApiResponse<PlaceOrderResponse>),
        (status = 400, description = "Missing or malformed field", body = ErrorBody),
        (status = 500, description = "Transaction failed and was rolled back", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn place_order(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<PlaceOrderRequest>,
) -> AppResult<Json<ApiResponse<PlaceOrderResponse>>> {
    let resp = order_service::place_order(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order with its items", body = ApiResponse<OrderWithItems>),
        (status = 404, description = "Not Found", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<OrderWithItems>>> {
    let resp = order_service::get_order(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}/payments",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Payments recorded for the order", body = ApiResponse<PaymentList>),
    ),
    tag = "Payments"
)]
pub async fn list_order_payments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<PaymentList>>> {
    let resp = payment_service::list_payments(&state, id).await?;
    Ok(Json(resp))
}
