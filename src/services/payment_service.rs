use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::{
    dto::payments::{PaymentList, RecordPaymentRequest, RecordPaymentResponse},
    entity::{
        orders::Entity as Orders,
        payments::{ActiveModel as PaymentActive, Column as PaymentCol, Entity as Payments},
        sea_orm_active_enums::PaymentStatus,
    },
    error::{AppError, AppResult},
    models::Payment,
    response::ApiResponse,
    state::AppState,
};

/// Record a completed payment against an existing order.
///
/// There is no gateway behind this and no idempotency key: calling it twice
/// with the same arguments stores two payments. The order's fulfillment
/// status is left untouched.
pub async fn record_payment(
    state: &AppState,
    payload: RecordPaymentRequest,
) -> AppResult<ApiResponse<RecordPaymentResponse>> {
    let new_payment = payload.validate()?;

    let txn = state.orm.begin().await?;

    if Orders::find_by_id(new_payment.order_id)
        .one(&txn)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound);
    }

    let payment = PaymentActive {
        id: NotSet,
        order_id: Set(new_payment.order_id),
        user_id: Set(new_payment.user_id),
        amount: Set(new_payment.amount),
        method: Set(new_payment.method),
        status: Set(PaymentStatus::Completed),
        created_at: Set(Utc::now().into()),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    tracing::info!(
        payment_id = payment.id,
        order_id = payment.order_id,
        amount = %payment.amount,
        method = ?payment.method,
        "payment recorded"
    );

    Ok(ApiResponse::success(
        "Payment recorded successfully",
        RecordPaymentResponse {
            payment_id: payment.id,
        },
    ))
}

pub async fn list_payments(
    state: &AppState,
    order_id: i32,
) -> AppResult<ApiResponse<PaymentList>> {
    let items = Payments::find()
        .filter(PaymentCol::OrderId.eq(order_id))
        .order_by_asc(PaymentCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Payment::from)
        .collect();

    Ok(ApiResponse::success("OK", PaymentList { items }))
}
