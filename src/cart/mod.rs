//! Client-side cart.
//!
//! The cart holds items from a single restaurant at a time. All state changes
//! go through [`reduce`], a pure function over [`CartAction`]s; [`CartStore`]
//! is the context object a client owns and dispatches into. Nothing here does
//! I/O or fails: rejected actions leave the state untouched.

mod checkout;
mod pricing;

pub use checkout::{CheckoutBackend, CheckoutError, CheckoutReceipt, CheckoutRequest, checkout};
pub use pricing::{CheckoutQuote, PricingPolicy};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    dto::orders::{OrderLineRequest, PlaceOrderRequest},
    entity::sea_orm_active_enums::DeliveryMode,
    models::MenuItem,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub item_id: i32,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub restaurant_id: i32,
}

impl CartItem {
    /// A line for `item` with quantity 1.
    pub fn from_menu_item(item: &MenuItem) -> Self {
        Self {
            item_id: item.menu_item_id,
            name: item.name.clone(),
            unit_price: item.price,
            quantity: 1,
            restaurant_id: item.restaurant_id,
        }
    }

    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Items in insertion order plus the restaurant they all belong to.
///
/// `restaurant_id` is `None` exactly when `items` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    pub items: Vec<CartItem>,
    pub restaurant_id: Option<i32>,
}

impl CartState {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether an item from `restaurant_id` may be added.
    pub fn accepts(&self, restaurant_id: i32) -> bool {
        self.restaurant_id.is_none_or(|current| current == restaurant_id)
    }

    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, item| count.saturating_add(item.quantity))
    }

    fn is_consistent(&self) -> bool {
        match self.restaurant_id {
            None => self.items.is_empty(),
            Some(id) => {
                !self.items.is_empty()
                    && self
                        .items
                        .iter()
                        .all(|item| {
                            item.restaurant_id == id && (1..=MAX_QUANTITY).contains(&item.quantity)
                        })
            }
        }
    }
}

/// Largest quantity a single line can hold; it must fit an order line.
pub const MAX_QUANTITY: u32 = i32::MAX as u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    AddItem(CartItem),
    RemoveItem(i32),
    UpdateQuantity { item_id: i32, quantity: u32 },
    Clear,
}

pub fn reduce(mut state: CartState, action: CartAction) -> CartState {
    match action {
        CartAction::AddItem(item) => {
            if !state.accepts(item.restaurant_id) {
                return state;
            }
            if let Some(existing) = state.items.iter_mut().find(|i| i.item_id == item.item_id) {
                existing.quantity = existing.quantity.saturating_add(1).min(MAX_QUANTITY);
            } else {
                state.restaurant_id = Some(item.restaurant_id);
                state.items.push(CartItem { quantity: 1, ..item });
            }
            state
        }
        CartAction::RemoveItem(item_id) => {
            state.items.retain(|i| i.item_id != item_id);
            if state.items.is_empty() {
                state.restaurant_id = None;
            }
            state
        }
        CartAction::UpdateQuantity {
            item_id,
            quantity: 0,
        } => reduce(state, CartAction::RemoveItem(item_id)),
        CartAction::UpdateQuantity { item_id, quantity } => {
            if let Some(existing) = state.items.iter_mut().find(|i| i.item_id == item_id) {
                existing.quantity = quantity.min(MAX_QUANTITY);
            }
            state
        }
        CartAction::Clear => CartState::default(),
    }
}

/// Result of [`CartStore::add_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// The cart holds items from another restaurant; nothing changed.
    RestaurantMismatch { cart_restaurant_id: i32 },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn dispatch(&mut self, action: CartAction) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    pub fn add_item(&mut self, item: CartItem) -> AddOutcome {
        if let Some(cart_restaurant_id) = self
            .state
            .restaurant_id
            .filter(|current| *current != item.restaurant_id)
        {
            return AddOutcome::RestaurantMismatch { cart_restaurant_id };
        }
        self.dispatch(CartAction::AddItem(item));
        AddOutcome::Added
    }

    pub fn remove_item(&mut self, item_id: i32) {
        self.dispatch(CartAction::RemoveItem(item_id));
    }

    pub fn update_quantity(&mut self, item_id: i32, quantity: u32) {
        self.dispatch(CartAction::UpdateQuantity { item_id, quantity });
    }

    pub fn clear(&mut self) {
        self.dispatch(CartAction::Clear);
    }

    pub fn subtotal(&self) -> Decimal {
        self.state.subtotal()
    }

    pub fn quote(
        &self,
        policy: &PricingPolicy,
        mode: DeliveryMode,
        coupon: Option<Decimal>,
    ) -> CheckoutQuote {
        policy.quote(self.subtotal(), mode, coupon)
    }

    /// Order payload for the current contents, or `None` for an empty cart.
    ///
    /// Quantities are carried over exactly; a line that would not fit an
    /// order line also yields `None`.
    pub fn snapshot(
        &self,
        user_id: i32,
        mode: DeliveryMode,
        total_amount: Decimal,
    ) -> Option<PlaceOrderRequest> {
        let restaurant_id = self.state.restaurant_id?;
        let items = self
            .state
            .items
            .iter()
            .map(|item| {
                i32::try_from(item.quantity)
                    .ok()
                    .map(|quantity| OrderLineRequest {
                        menu_item_id: item.item_id,
                        quantity,
                    })
            })
            .collect::<Option<Vec<_>>>()?;

        Some(PlaceOrderRequest {
            user_id: Some(user_id),
            restaurant_id: Some(restaurant_id),
            items: Some(items),
            delivery_type: Some(mode),
            total_amount: Some(total_amount),
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.state)
    }

    /// Rehydrate from [`CartStore::to_json`] output.
    ///
    /// Unreadable or inconsistent input yields an empty cart.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<CartState>(json) {
            Ok(state) if state.is_consistent() => Self { state },
            Ok(_) => {
                tracing::warn!("discarding inconsistent persisted cart");
                Self::default()
            }
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable persisted cart");
                Self::default()
            }
        }
    }
}
