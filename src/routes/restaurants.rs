use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    error::{AppResult, ErrorBody},
    models::{MenuItem, Restaurant},
    services::menu_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(get_restaurant))
        .route("/{id}/menu", get(list_menu))
}

#[utoipa::path(
    get,
    path = "/api/restaurants/{id}",
    params(("id" = i32, Path, description = "Restaurant ID")),
    responses(
        (status = 200, description = "Restaurant", body = Restaurant),
        (status = 404, description = "Not Found", body = ErrorBody),
    ),
    tag = "Restaurants"
)]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Restaurant>> {
    let restaurant = menu_service::get_restaurant(&state, id).await?;
    Ok(Json(restaurant))
}

#[utoipa::path(
    get,
    path = "/api/restaurants/{id}/menu",
    params(("id" = i32, Path, description = "Restaurant ID")),
    responses(
        (status = 200, description = "Menu items of the restaurant", body = Vec<MenuItem>),
    ),
    tag = "Restaurants"
)]
pub async fn list_menu(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<MenuItem>>> {
    let items = menu_service::list_menu(&state, id).await?;
    Ok(Json(items))
}
