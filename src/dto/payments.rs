use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    entity::sea_orm_active_enums::PaymentMethod,
    error::{AppError, AppResult},
    models::Payment,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentRequest {
    pub user_id: Option<i32>,
    pub order_id: Option<i32>,
    pub amount: Option<Decimal>,
    pub method: Option<PaymentMethod>,
}

#[derive(Debug, Clone)]
pub struct NewPayment {
    pub user_id: i32,
    pub order_id: i32,
    pub amount: Decimal,
    pub method: PaymentMethod,
}

impl RecordPaymentRequest {
    pub fn validate(self) -> AppResult<NewPayment> {
        let user_id = self.user_id.ok_or_else(|| missing("userId"))?;
        let order_id = self.order_id.ok_or_else(|| missing("orderId"))?;
        let amount = self.amount.ok_or_else(|| missing("amount"))?;
        let method = self.method.ok_or_else(|| missing("method"))?;

        if amount <= Decimal::ZERO {
            return Err(AppError::Validation("amount must be positive".into()));
        }

        Ok(NewPayment {
            user_id,
            order_id,
            amount,
            method,
        })
    }
}

fn missing(field: &str) -> AppError {
    AppError::Validation(format!("{field} is required"))
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentResponse {
    pub payment_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentList {
    pub items: Vec<Payment>,
}
