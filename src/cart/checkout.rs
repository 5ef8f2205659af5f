use std::future::Future;

use rust_decimal::Decimal;
use thiserror::Error;

use super::{CartStore, PricingPolicy};
use crate::{
    dto::{orders::PlaceOrderRequest, payments::RecordPaymentRequest},
    entity::sea_orm_active_enums::{DeliveryMode, PaymentMethod},
    error::{AppError, AppResult},
    services::{order_service, payment_service},
    state::AppState,
};

/// The two server calls a checkout needs.
pub trait CheckoutBackend {
    /// Returns the new order id.
    fn place_order(
        &self,
        request: PlaceOrderRequest,
    ) -> impl Future<Output = AppResult<i32>> + Send;

    /// Returns the new payment id.
    fn record_payment(
        &self,
        request: RecordPaymentRequest,
    ) -> impl Future<Output = AppResult<i32>> + Send;
}

impl CheckoutBackend for AppState {
    async fn place_order(&self, request: PlaceOrderRequest) -> AppResult<i32> {
        let resp = order_service::place_order(self, request).await?;
        Ok(resp.data.order_id)
    }

    async fn record_payment(&self, request: RecordPaymentRequest) -> AppResult<i32> {
        let resp = payment_service::record_payment(self, request).await?;
        Ok(resp.data.payment_id)
    }
}

#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub user_id: i32,
    pub delivery_mode: DeliveryMode,
    pub payment_method: PaymentMethod,
    pub coupon: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutReceipt {
    pub order_id: i32,
    /// `None` when the total was zero and nothing was charged.
    pub payment_id: Option<i32>,
    pub amount: Decimal,
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("order placement failed")]
    OrderPlacement(#[source] AppError),

    /// The order exists but is unpaid; it stays `Pending`.
    #[error("payment for order {order_id} failed")]
    Payment {
        order_id: i32,
        #[source]
        source: AppError,
    },
}

/// Place the cart as an order, pay for it, then empty the cart.
///
/// The cart is cleared only after both calls succeed, so any failure leaves
/// it intact for a retry.
pub async fn checkout<B: CheckoutBackend>(
    store: &mut CartStore,
    backend: &B,
    pricing: &PricingPolicy,
    request: CheckoutRequest,
) -> Result<CheckoutReceipt, CheckoutError> {
    let quote = store.quote(pricing, request.delivery_mode, request.coupon);
    let snapshot = store
        .snapshot(request.user_id, request.delivery_mode, quote.total)
        .ok_or(CheckoutError::EmptyCart)?;

    let order_id = backend
        .place_order(snapshot)
        .await
        .map_err(CheckoutError::OrderPlacement)?;

    let payment_id = if quote.total > Decimal::ZERO {
        let payment_id = backend
            .record_payment(RecordPaymentRequest {
                user_id: Some(request.user_id),
                order_id: Some(order_id),
                amount: Some(quote.total),
                method: Some(request.payment_method),
            })
            .await
            .map_err(|source| CheckoutError::Payment { order_id, source })?;
        Some(payment_id)
    } else {
        None
    };

    store.clear();

    Ok(CheckoutReceipt {
        order_id,
        payment_id,
        amount: quote.total,
    })
}
