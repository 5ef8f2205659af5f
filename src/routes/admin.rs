use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, put},
};

use crate::{
    dto::admin::{OrderEnvelope, QueueOrder, UpdateOrderStatusRequest},
    error::{AppResult, ErrorBody},
    extract::ApiJson,
    response::ApiResponse,
    routes::params::OrderQueueQuery,
    services::fulfillment_service,
    state::AppState,
};

// Both routes share the `{id}` segment: a restaurant id for the queue, an
// order id for the status update.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders/{id}", get(list_restaurant_orders))
        .route("/orders/{id}/status", put(update_order_status))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders/{id}",
    params(
        ("id" = i32, Path, description = "Restaurant ID"),
        OrderQueueQuery
    ),
    responses(
        (status = 200, description = "Fulfillment queue of the restaurant", body = Vec<QueueOrder>),
        (status = 500, description = "Internal Server Error", body = ErrorBody),
    ),
    tag = "Admin"
)]
pub async fn list_restaurant_orders(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<OrderQueueQuery>,
) -> AppResult<Json<Vec<QueueOrder>>> {
    let queue = fulfillment_service::list_restaurant_orders(&state, id, query).await?;
    Ok(Json(queue))
}

#[utoipa::path(
    put,
    path = "/api/admin/orders/{id}/status",
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Order status updated", body = ApiResponse<OrderEnvelope>),
        (status = 400, description = "Missing or unknown status", body = ErrorBody),
        (status = 404, description = "Not Found", body = ErrorBody),
        (status = 409, description = "Transition not allowed from the current status", body = ErrorBody),
    ),
    tag = "Admin"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateOrderStatusRequest>,
) -> AppResult<Json<ApiResponse<OrderEnvelope>>> {
    let resp = fulfillment_service::update_order_status(&state, id, payload).await?;
    Ok(Json(resp))
}
