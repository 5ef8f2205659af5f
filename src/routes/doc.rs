use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        admin::{CustomerDetails, OrderEnvelope, QueueOrder, QueueOrderItem, UpdateOrderStatusRequest},
        orders::{OrderLineRequest, OrderWithItems, PlaceOrderRequest, PlaceOrderResponse},
        payments::{PaymentList, RecordPaymentRequest, RecordPaymentResponse},
    },
    entity::sea_orm_active_enums::{DeliveryMode, OrderStatus, PaymentMethod, PaymentStatus},
    error::ErrorBody,
    models::{MenuItem, Order, OrderItem, Payment, Restaurant},
    response::ApiResponse,
    routes::{admin, health, orders, params, payments, restaurants},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        restaurants::get_restaurant,
        restaurants::list_menu,
        orders::place_order,
        orders::get_order,
        orders::list_order_payments,
        payments::record_payment,
        admin::list_restaurant_orders,
        admin::update_order_status
    ),
    components(
        schemas(
            Restaurant,
            MenuItem,
            Order,
            OrderItem,
            Payment,
            OrderStatus,
            DeliveryMode,
            PaymentMethod,
            PaymentStatus,
            PlaceOrderRequest,
            OrderLineRequest,
            PlaceOrderResponse,
            OrderWithItems,
            RecordPaymentRequest,
            RecordPaymentResponse,
            PaymentList,
            UpdateOrderStatusRequest,
            QueueOrder,
            QueueOrderItem,
            CustomerDetails,
            OrderEnvelope,
            params::SortOrder,
            ErrorBody,
            ApiResponse<PlaceOrderResponse>,
            ApiResponse<OrderWithItems>,
            ApiResponse<RecordPaymentResponse>,
            ApiResponse<PaymentList>,
            ApiResponse<OrderEnvelope>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Restaurants", description = "Restaurant and menu catalog"),
        (name = "Orders", description = "Order placement"),
        (name = "Payments", description = "Payment recording"),
        (name = "Admin", description = "Fulfillment queue and status transitions"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
