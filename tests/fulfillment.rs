use food_order_api::{
    entity::sea_orm_active_enums::OrderStatus,
    error::AppError,
    fulfillment::ensure_transition,
};
use sea_orm::Iterable;

#[test]
fn only_table_transitions_are_legal() {
    use OrderStatus::*;
    let legal = [
        (Pending, Processing),
        (Pending, Cancelled),
        (Processing, Completed),
        (Processing, Cancelled),
    ];

    for from in OrderStatus::iter() {
        for to in OrderStatus::iter() {
            let expected = legal.contains(&(from, to));
            assert_eq!(from.can_transition_to(to), expected, "{from:?} -> {to:?}");
            match ensure_transition(from, to) {
                Ok(()) => assert!(expected),
                Err(AppError::Conflict(_)) => assert!(!expected),
                Err(other) => panic!("unexpected error {other:?}"),
            }
        }
    }
}

#[test]
fn terminal_states_offer_no_controls() {
    assert!(OrderStatus::Completed.is_terminal());
    assert!(OrderStatus::Cancelled.is_terminal());
    assert!(OrderStatus::Completed.allowed_transitions().is_empty());

    assert_eq!(
        OrderStatus::Pending.allowed_transitions(),
        vec![OrderStatus::Processing, OrderStatus::Cancelled]
    );
    assert_eq!(
        OrderStatus::Processing.allowed_transitions(),
        vec![OrderStatus::Completed, OrderStatus::Cancelled]
    );
}

#[test]
fn conflict_message_names_the_states() {
    let Err(AppError::Conflict(reason)) = ensure_transition(OrderStatus::Pending, OrderStatus::Completed)
    else {
        panic!("Pending -> Completed must conflict");
    };
    assert!(reason.contains("Pending") && reason.contains("Completed"));

    let Err(AppError::Conflict(reason)) = ensure_transition(OrderStatus::Cancelled, OrderStatus::Pending)
    else {
        panic!("terminal state must conflict");
    };
    assert!(reason.contains("already Cancelled"));
}
