use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    entity::sea_orm_active_enums::{DeliveryMode, OrderStatus},
    models::Order,
};

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: Option<OrderStatus>,
}

/// One entry of a restaurant's fulfillment queue.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueueOrder {
    pub order_id: i32,
    pub user_id: i32,
    pub status: OrderStatus,
    pub total_amount: Decimal,
    pub delivery_mode: DeliveryMode,
    pub created_at: DateTime<Utc>,
    pub customer: Option<CustomerDetails>,
    pub items: Vec<QueueOrderItem>,
    /// Statuses the order may move to next; empty once terminal.
    pub allowed_transitions: Vec<OrderStatus>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueueOrderItem {
    pub menu_item_id: i32,
    pub name: Option<String>,
    pub quantity: i32,
    pub price: Option<Decimal>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderEnvelope {
    pub order: Order,
}
