use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::payments::{RecordPaymentRequest, RecordPaymentResponse},
    error::{AppResult, ErrorBody},
    extract::ApiJson,
    response::ApiResponse,
    services::payment_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(record_payment))
}

#[utoipa::path(
    post,
    path = "/api/payments",
    request_body = RecordPaymentRequest,
    responses(
        (status = 200, description = "Payment recorded", body = ApiResponse<RecordPaymentResponse>),
        (status = 400, description = "Missing or malformed field", body = ErrorBody),
        (status = 404, description = "Order not found", body = ErrorBody),
        (status = 500, description = "Transaction failed and was rolled back", body = ErrorBody),
    ),
    tag = "Payments"
)]
pub async fn record_payment(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RecordPaymentRequest>,
) -> AppResult<Json<ApiResponse<RecordPaymentResponse>>> {
    let resp = payment_service::record_payment(&state, payload).await?;
    Ok(Json(resp))
}
