use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{
    menu_items, order_items, orders, payments, restaurants,
    sea_orm_active_enums::{DeliveryMode, OrderStatus, PaymentMethod, PaymentStatus},
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub restaurant_id: i32,
    pub name: String,
    pub location: String,
    pub cuisine: String,
    pub rating: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub menu_item_id: i32,
    pub restaurant_id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub in_stock: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: i32,
    pub user_id: i32,
    pub restaurant_id: i32,
    pub status: OrderStatus,
    pub total_amount: Decimal,
    pub delivery_mode: DeliveryMode,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub order_id: i32,
    pub menu_item_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub payment_id: i32,
    pub order_id: i32,
    pub user_id: i32,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl From<restaurants::Model> for Restaurant {
    fn from(model: restaurants::Model) -> Self {
        Self {
            restaurant_id: model.id,
            name: model.name,
            location: model.location,
            cuisine: model.cuisine,
            rating: model.rating,
        }
    }
}

impl From<menu_items::Model> for MenuItem {
    fn from(model: menu_items::Model) -> Self {
        Self {
            menu_item_id: model.id,
            restaurant_id: model.restaurant_id,
            name: model.name,
            description: model.description,
            price: model.price,
            category: model.category,
            in_stock: model.in_stock,
        }
    }
}

impl From<orders::Model> for Order {
    fn from(model: orders::Model) -> Self {
        Self {
            order_id: model.id,
            user_id: model.user_id,
            restaurant_id: model.restaurant_id,
            status: model.status,
            total_amount: model.total_amount,
            delivery_mode: model.delivery_mode,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<order_items::Model> for OrderItem {
    fn from(model: order_items::Model) -> Self {
        Self {
            order_id: model.order_id,
            menu_item_id: model.menu_item_id,
            quantity: model.quantity,
        }
    }
}

impl From<payments::Model> for Payment {
    fn from(model: payments::Model) -> Self {
        Self {
            payment_id: model.id,
            order_id: model.order_id,
            user_id: model.user_id,
            amount: model.amount,
            method: model.method,
            status: model.status,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
