//! Order fulfillment state machine.
//!
//! ```text
//! Pending ──► Processing ──► Completed
//!    │             │
//!    └──► Cancelled ◄┘
//! ```
//!
//! `Completed` and `Cancelled` are terminal. Every status change requested
//! through the admin API is checked against [`TRANSITIONS`] before it reaches
//! the database.

use crate::{
    entity::sea_orm_active_enums::OrderStatus,
    error::{AppError, AppResult},
};

/// Every legal `(from, to)` pair. Anything not listed is rejected.
pub const TRANSITIONS: [(OrderStatus, OrderStatus); 4] = [
    (OrderStatus::Pending, OrderStatus::Processing),
    (OrderStatus::Pending, OrderStatus::Cancelled),
    (OrderStatus::Processing, OrderStatus::Completed),
    (OrderStatus::Processing, OrderStatus::Cancelled),
];

impl OrderStatus {
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        TRANSITIONS.contains(&(self, next))
    }

    /// Statuses reachable in one step, in table order.
    pub fn allowed_transitions(self) -> Vec<OrderStatus> {
        TRANSITIONS
            .iter()
            .filter(|(from, _)| *from == self)
            .map(|(_, to)| *to)
            .collect()
    }

    pub fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

/// Fails with [`AppError::Conflict`] when `from -> to` is not in the table.
pub fn ensure_transition(from: OrderStatus, to: OrderStatus) -> AppResult<()> {
    if from.can_transition_to(to) {
        return Ok(());
    }

    let reason = if from.is_terminal() {
        format!("order is already {} and cannot change", from.as_str())
    } else {
        format!(
            "cannot move order from {} to {}",
            from.as_str(),
            to.as_str()
        )
    };
    Err(AppError::Conflict(reason))
}
