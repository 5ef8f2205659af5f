use std::collections::HashMap;

use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    dto::admin::{
        CustomerDetails, OrderEnvelope, QueueOrder, QueueOrderItem, UpdateOrderStatusRequest,
    },
    entity::{
        menu_items::Entity as MenuItems,
        order_items::{Column as OrderItemCol, Entity as OrderItems},
        orders::{Column as OrderCol, Entity as Orders},
        sea_orm_active_enums::OrderStatus,
        users::Entity as Users,
    },
    error::{AppError, AppResult},
    fulfillment::ensure_transition,
    models::Order,
    response::ApiResponse,
    routes::params::{OrderQueueQuery, SortOrder},
    state::AppState,
};

/// The fulfillment queue of one restaurant: its orders with line items,
/// customer details and the transitions each order still allows.
pub async fn list_restaurant_orders(
    state: &AppState,
    restaurant_id: i32,
    query: OrderQueueQuery,
) -> AppResult<Vec<QueueOrder>> {
    let mut condition = Condition::all().add(OrderCol::RestaurantId.eq(restaurant_id));
    if let Some(status) = query.status {
        condition = condition.add(OrderCol::Status.eq(status));
    }

    let mut finder = Orders::find().filter(condition);
    finder = match query.sort_order.unwrap_or(SortOrder::Desc) {
        SortOrder::Asc => finder
            .order_by_asc(OrderCol::CreatedAt)
            .order_by_asc(OrderCol::Id),
        SortOrder::Desc => finder
            .order_by_desc(OrderCol::CreatedAt)
            .order_by_desc(OrderCol::Id),
    };

    let rows = finder.find_also_related(Users).all(&state.orm).await?;

    let order_ids: Vec<i32> = rows.iter().map(|(order, _)| order.id).collect();
    let mut items_by_order: HashMap<i32, Vec<QueueOrderItem>> = HashMap::new();
    if !order_ids.is_empty() {
        let lines = OrderItems::find()
            .filter(OrderItemCol::OrderId.is_in(order_ids))
            .order_by_asc(OrderItemCol::Id)
            .find_also_related(MenuItems)
            .all(&state.orm)
            .await?;
        for (line, menu_item) in lines {
            items_by_order
                .entry(line.order_id)
                .or_default()
                .push(QueueOrderItem {
                    menu_item_id: line.menu_item_id,
                    name: menu_item.as_ref().map(|m| m.name.clone()),
                    quantity: line.quantity,
                    price: menu_item.map(|m| m.price),
                });
        }
    }

    let queue = rows
        .into_iter()
        .map(|(order, user)| QueueOrder {
            order_id: order.id,
            user_id: order.user_id,
            status: order.status,
            total_amount: order.total_amount,
            delivery_mode: order.delivery_mode,
            created_at: order.created_at.with_timezone(&chrono::Utc),
            customer: user.map(|u| CustomerDetails {
                name: u.name,
                phone: u.phone,
                address: u.location,
            }),
            items: items_by_order.remove(&order.id).unwrap_or_default(),
            allowed_transitions: order.status.allowed_transitions(),
        })
        .collect();

    Ok(queue)
}

/// Move an order along the fulfillment state machine.
///
/// The write only lands if the status is still the one that was validated,
/// so a concurrent change by another admin is reported as a conflict.
pub async fn update_order_status(
    state: &AppState,
    id: i32,
    payload: UpdateOrderStatusRequest,
) -> AppResult<ApiResponse<OrderEnvelope>> {
    let next = payload
        .status
        .ok_or_else(|| AppError::Validation("status is required".into()))?;

    let existing = Orders::find_by_id(id).one(&state.orm).await?;
    let mut existing = match existing {
        Some(o) => o,
        None => return Err(AppError::NotFound),
    };

    let current = existing.status;
    ensure_transition(current, next).inspect_err(|_| {
        tracing::warn!(
            order_id = id,
            from = current.as_str(),
            to = next.as_str(),
            "illegal status transition rejected"
        );
    })?;

    apply_status_change(&state.orm, id, current, next).await?;

    tracing::info!(
        order_id = id,
        from = current.as_str(),
        to = next.as_str(),
        "order status updated"
    );

    existing.status = next;
    Ok(ApiResponse::success(
        "Order status updated",
        OrderEnvelope {
            order: Order::from(existing),
        },
    ))
}

/// Write `next` only if the order still has the `observed` status.
///
/// Zero affected rows means someone else moved the order after it was read.
pub async fn apply_status_change<C: ConnectionTrait>(
    conn: &C,
    id: i32,
    observed: OrderStatus,
    next: OrderStatus,
) -> AppResult<()> {
    let result = Orders::update_many()
        .col_expr(OrderCol::Status, Expr::value(next))
        .filter(OrderCol::Id.eq(id))
        .filter(OrderCol::Status.eq(observed))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::Conflict(format!(
            "order {id} changed status concurrently, reload and retry"
        )));
    }
    Ok(())
}
