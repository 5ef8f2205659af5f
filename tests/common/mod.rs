#![allow(dead_code)]

use chrono::Utc;
use food_order_api::{
    db::{create_orm_conn, run_migrations},
    entity::{
        menu_items::ActiveModel as MenuItemActive,
        orders::ActiveModel as OrderActive,
        restaurants::ActiveModel as RestaurantActive,
        sea_orm_active_enums::{DeliveryMode, OrderStatus},
        users::ActiveModel as UserActive,
    },
    state::AppState,
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, Set};

/// Fresh in-memory database with the schema applied.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:").await?;
    run_migrations(&orm).await?;
    Ok(AppState { orm })
}

pub async fn create_restaurant(state: &AppState, id: i32, name: &str) -> anyhow::Result<()> {
    RestaurantActive {
        id: Set(id),
        name: Set(name.to_string()),
        location: Set("BTM Layout".into()),
        cuisine: Set("South Indian".into()),
        rating: Set(None),
    }
    .insert(&state.orm)
    .await?;
    Ok(())
}

pub async fn create_user(state: &AppState, id: i32, name: &str) -> anyhow::Result<()> {
    UserActive {
        id: Set(id),
        name: Set(name.to_string()),
        email: Set(format!("user{id}@example.com")),
        phone: Set("9000000000".into()),
        location: Set("HSR Layout".into()),
    }
    .insert(&state.orm)
    .await?;
    Ok(())
}

pub async fn create_menu_item(
    state: &AppState,
    id: i32,
    restaurant_id: i32,
    name: &str,
    price: i64,
) -> anyhow::Result<()> {
    MenuItemActive {
        id: Set(id),
        restaurant_id: Set(restaurant_id),
        name: Set(name.to_string()),
        description: Set(format!("{name} of the day")),
        price: Set(Decimal::from(price)),
        category: Set("Mains".into()),
        in_stock: Set(true),
    }
    .insert(&state.orm)
    .await?;
    Ok(())
}

pub async fn create_order(
    state: &AppState,
    id: i32,
    user_id: i32,
    restaurant_id: i32,
    status: OrderStatus,
) -> anyhow::Result<()> {
    OrderActive {
        id: Set(id),
        user_id: Set(user_id),
        restaurant_id: Set(restaurant_id),
        status: Set(status),
        total_amount: Set(Decimal::from(240)),
        delivery_mode: Set(DeliveryMode::Pickup),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;
    Ok(())
}

/// User 1 and restaurant 3 serving menu item 7 at 120.
pub async fn seed_catalog(state: &AppState) -> anyhow::Result<()> {
    create_user(state, 1, "Asha").await?;
    create_restaurant(state, 3, "Dosa Corner").await?;
    create_menu_item(state, 7, 3, "Masala Dosa", 120).await?;
    create_menu_item(state, 8, 3, "Filter Coffee", 40).await?;
    Ok(())
}
