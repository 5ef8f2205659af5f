use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::{
    dto::orders::{NewOrder, OrderWithItems, PlaceOrderRequest, PlaceOrderResponse},
    entity::{
        order_items::{ActiveModel as OrderItemActive, Column as OrderItemCol, Entity as OrderItems},
        orders::{ActiveModel as OrderActive, Entity as Orders, Model as OrderModel},
        sea_orm_active_enums::OrderStatus,
    },
    error::{AppError, AppResult},
    models::{Order, OrderItem},
    response::ApiResponse,
    state::AppState,
};

/// Validate a cart snapshot and persist it as one order.
///
/// The order header and all of its line items are written in a single
/// transaction. Prices are not re-derived from the menu: the client supplied
/// `totalAmount` is stored as sent.
pub async fn place_order(
    state: &AppState,
    payload: PlaceOrderRequest,
) -> AppResult<ApiResponse<PlaceOrderResponse>> {
    let new_order = payload.validate()?;

    let txn = state.orm.begin().await?;
    // An early return drops `txn` uncommitted, which rolls everything back.
    let order = insert_order(&txn, &new_order).await?;
    txn.commit().await?;

    tracing::info!(
        order_id = order.id,
        user_id = order.user_id,
        restaurant_id = order.restaurant_id,
        lines = new_order.items.len(),
        total = %order.total_amount,
        "order placed"
    );

    Ok(ApiResponse::success(
        "Order placed successfully",
        PlaceOrderResponse { order_id: order.id },
    ))
}

async fn insert_order(txn: &DatabaseTransaction, new_order: &NewOrder) -> AppResult<OrderModel> {
    let order = OrderActive {
        id: NotSet,
        user_id: Set(new_order.user_id),
        restaurant_id: Set(new_order.restaurant_id),
        status: Set(OrderStatus::Pending),
        total_amount: Set(new_order.total_amount),
        delivery_mode: Set(new_order.delivery_mode),
        created_at: Set(Utc::now().into()),
    }
    .insert(txn)
    .await?;

    for line in &new_order.items {
        OrderItemActive {
            id: NotSet,
            order_id: Set(order.id),
            menu_item_id: Set(line.menu_item_id),
            quantity: Set(line.quantity),
        }
        .insert(txn)
        .await
        .inspect_err(|err| {
            tracing::warn!(
                error = %err,
                menu_item_id = line.menu_item_id,
                "order line insert failed, rolling back"
            );
        })?;
    }

    Ok(order)
}

pub async fn get_order(state: &AppState, id: i32) -> AppResult<ApiResponse<OrderWithItems>> {
    let order = Orders::find_by_id(id).one(&state.orm).await?;
    let order = match order {
        Some(o) => o,
        None => return Err(AppError::NotFound),
    };

    let items = OrderItems::find()
        .filter(OrderItemCol::OrderId.eq(order.id))
        .order_by_asc(OrderItemCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(OrderItem::from)
        .collect();

    Ok(ApiResponse::success(
        "OK",
        OrderWithItems {
            order: Order::from(order),
            items,
        },
    ))
}
