use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::entity::sea_orm_active_enums::OrderStatus;

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Filters for a restaurant's fulfillment queue.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderQueueQuery {
    /// Only orders in this status.
    pub status: Option<OrderStatus>,
    /// Creation time ordering, newest first by default.
    pub sort_order: Option<SortOrder>,
}
