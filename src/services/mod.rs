pub mod fulfillment_service;
pub mod menu_service;
pub mod order_service;
pub mod payment_service;
