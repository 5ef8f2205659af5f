use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    entity::sea_orm_active_enums::DeliveryMode,
    error::{AppError, AppResult},
    models::{Order, OrderItem},
};

/// Checkout payload sent by the client. Fields are optional on the wire so
/// that a missing field is reported through the failure envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub user_id: Option<i32>,
    pub restaurant_id: Option<i32>,
    pub items: Option<Vec<OrderLineRequest>>,
    pub delivery_type: Option<DeliveryMode>,
    pub total_amount: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    pub menu_item_id: i32,
    pub quantity: i32,
}

/// A checkout payload that passed validation.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: i32,
    pub restaurant_id: i32,
    pub items: Vec<OrderLineRequest>,
    pub delivery_mode: DeliveryMode,
    pub total_amount: Decimal,
}

impl PlaceOrderRequest {
    pub fn validate(self) -> AppResult<NewOrder> {
        let user_id = self.user_id.ok_or_else(|| missing("userId"))?;
        let restaurant_id = self.restaurant_id.ok_or_else(|| missing("restaurantId"))?;
        let delivery_mode = self.delivery_type.ok_or_else(|| missing("deliveryType"))?;
        let total_amount = self.total_amount.ok_or_else(|| missing("totalAmount"))?;
        let items = self.items.ok_or_else(|| missing("items"))?;

        if items.is_empty() {
            return Err(AppError::Validation("items must not be empty".into()));
        }
        if let Some(line) = items.iter().find(|line| line.quantity < 1) {
            return Err(AppError::Validation(format!(
                "quantity for menu item {} must be at least 1",
                line.menu_item_id
            )));
        }
        if total_amount < Decimal::ZERO {
            return Err(AppError::Validation(
                "totalAmount must not be negative".into(),
            ));
        }

        Ok(NewOrder {
            user_id,
            restaurant_id,
            items,
            delivery_mode,
            total_amount,
        })
    }
}

fn missing(field: &str) -> AppError {
    AppError::Validation(format!("{field} is required"))
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    pub order_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderWithItems {
    pub order: Order,
    pub items: Vec<OrderItem>,
}
