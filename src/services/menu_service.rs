use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    entity::{
        menu_items::{Column as MenuCol, Entity as MenuItems},
        restaurants::Entity as Restaurants,
    },
    error::{AppError, AppResult},
    models::{MenuItem, Restaurant},
    state::AppState,
};

pub async fn get_restaurant(state: &AppState, id: i32) -> AppResult<Restaurant> {
    Restaurants::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Restaurant::from)
        .ok_or(AppError::NotFound)
}

/// Menu of one restaurant, ordered by category.
pub async fn list_menu(state: &AppState, restaurant_id: i32) -> AppResult<Vec<MenuItem>> {
    let items = MenuItems::find()
        .filter(MenuCol::RestaurantId.eq(restaurant_id))
        .order_by_asc(MenuCol::Category)
        .order_by_asc(MenuCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(MenuItem::from)
        .collect();
    Ok(items)
}
