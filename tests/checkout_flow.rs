mod common;

use std::sync::atomic::{AtomicUsize, Ordering};

use food_order_api::{
    cart::{CartItem, CartStore, CheckoutBackend, CheckoutError, CheckoutRequest, PricingPolicy, checkout},
    dto::{orders::PlaceOrderRequest, payments::RecordPaymentRequest},
    entity::sea_orm_active_enums::{DeliveryMode, OrderStatus, PaymentMethod},
    error::{AppError, AppResult},
    services::{menu_service, order_service, payment_service},
};
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, Statement};

fn pickup_with_wallet() -> CheckoutRequest {
    CheckoutRequest {
        user_id: 1,
        delivery_mode: DeliveryMode::Pickup,
        payment_method: PaymentMethod::Wallet,
        coupon: None,
    }
}

fn flat_pricing() -> PricingPolicy {
    PricingPolicy {
        tax_rate: Decimal::ZERO,
        delivery_fee: Decimal::from(30),
        pickup_fee: Decimal::ZERO,
    }
}

#[tokio::test]
async fn checkout_places_pays_and_clears_the_cart() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    common::seed_catalog(&state).await?;

    let menu = menu_service::list_menu(&state, 3).await?;
    let dosa = menu
        .iter()
        .find(|item| item.menu_item_id == 7)
        .expect("seeded menu item");

    let mut store = CartStore::new();
    store.add_item(CartItem::from_menu_item(dosa));
    store.add_item(CartItem::from_menu_item(dosa));

    let receipt = checkout(&mut store, &state, &flat_pricing(), pickup_with_wallet()).await?;

    assert_eq!(receipt.amount, Decimal::from(240));
    assert!(store.state().is_empty());
    assert_eq!(store.state().restaurant_id, None);

    let order = order_service::get_order(&state, receipt.order_id).await?.data;
    assert_eq!(order.order.restaurant_id, 3);
    assert_eq!(order.order.status, OrderStatus::Pending);
    assert_eq!(order.order.total_amount, Decimal::from(240));
    assert_eq!(order.items.len(), 1);
    assert_eq!((order.items[0].menu_item_id, order.items[0].quantity), (7, 2));

    let payments = payment_service::list_payments(&state, receipt.order_id).await?.data.items;
    assert_eq!(payments.len(), 1);
    assert_eq!(Some(payments[0].payment_id), receipt.payment_id);
    assert_eq!(payments[0].method, PaymentMethod::Wallet);
    Ok(())
}

#[tokio::test]
async fn fully_discounted_checkout_skips_payment() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    common::seed_catalog(&state).await?;

    let mut store = CartStore::new();
    store.add_item(CartItem {
        item_id: 8,
        name: "Filter Coffee".into(),
        unit_price: Decimal::from(40),
        quantity: 1,
        restaurant_id: 3,
    });

    let request = CheckoutRequest {
        coupon: Some(Decimal::from(100)),
        ..pickup_with_wallet()
    };
    let receipt = checkout(&mut store, &state, &flat_pricing(), request).await?;

    assert_eq!(receipt.amount, Decimal::ZERO);
    assert_eq!(receipt.payment_id, None);
    assert!(store.state().is_empty());

    let order = order_service::get_order(&state, receipt.order_id).await?.data.order;
    assert_eq!(order.total_amount, Decimal::ZERO);
    let payments = payment_service::list_payments(&state, receipt.order_id).await?.data.items;
    assert!(payments.is_empty());
    Ok(())
}

#[tokio::test]
async fn empty_cart_does_not_reach_the_server() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let mut store = CartStore::new();

    let err = checkout(&mut store, &state, &flat_pricing(), pickup_with_wallet())
        .await
        .expect_err("nothing to order");
    assert!(matches!(err, CheckoutError::EmptyCart));
    Ok(())
}

/// Accepts orders but fails every payment.
struct PaymentsDown {
    orders_placed: AtomicUsize,
}

impl CheckoutBackend for PaymentsDown {
    async fn place_order(&self, _request: PlaceOrderRequest) -> AppResult<i32> {
        Ok(self.orders_placed.fetch_add(1, Ordering::SeqCst) as i32 + 100)
    }

    async fn record_payment(&self, _request: RecordPaymentRequest) -> AppResult<i32> {
        Err(AppError::Internal(anyhow::anyhow!("gateway unavailable")))
    }
}

#[tokio::test]
async fn failed_payment_keeps_the_cart_for_retry() {
    let backend = PaymentsDown {
        orders_placed: AtomicUsize::new(0),
    };
    let mut store = CartStore::new();
    store.add_item(CartItem {
        item_id: 7,
        name: "Masala Dosa".into(),
        unit_price: Decimal::from(120),
        quantity: 1,
        restaurant_id: 3,
    });
    let before = store.clone();

    let err = checkout(&mut store, &backend, &flat_pricing(), pickup_with_wallet())
        .await
        .expect_err("payment fails");

    assert!(matches!(err, CheckoutError::Payment { order_id: 100, .. }));
    assert_eq!(store, before);
    assert_eq!(backend.orders_placed.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn rejected_order_keeps_the_cart() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    common::seed_catalog(&state).await?;
    let backend = state.orm.get_database_backend();
    state
        .orm
        .execute(Statement::from_string(backend, "DROP TABLE order_items"))
        .await?;

    let mut store = CartStore::new();
    store.add_item(CartItem {
        item_id: 7,
        name: "Masala Dosa".into(),
        unit_price: Decimal::from(120),
        quantity: 1,
        restaurant_id: 3,
    });
    let before = store.clone();

    let err = checkout(&mut store, &state, &flat_pricing(), pickup_with_wallet())
        .await
        .expect_err("persistence rejects the order");
    assert!(matches!(err, CheckoutError::OrderPlacement(_)));
    assert_eq!(store, before);
    Ok(())
}
