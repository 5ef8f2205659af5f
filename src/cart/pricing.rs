use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entity::sea_orm_active_enums::DeliveryMode;

/// How the client turns a subtotal into the amount it sends at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPolicy {
    /// Fraction of the subtotal, e.g. `0.05` for 5%.
    pub tax_rate: Decimal,
    pub delivery_fee: Decimal,
    pub pickup_fee: Decimal,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            tax_rate: Decimal::new(5, 2),
            delivery_fee: Decimal::new(5, 0),
            pickup_fee: Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutQuote {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub fee: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

impl PricingPolicy {
    /// `coupon` is a flat amount off; the total never drops below zero.
    pub fn quote(&self, subtotal: Decimal, mode: DeliveryMode, coupon: Option<Decimal>) -> CheckoutQuote {
        let tax = (subtotal * self.tax_rate).round_dp(2);
        let fee = match mode {
            DeliveryMode::Delivery => self.delivery_fee,
            DeliveryMode::Pickup => self.pickup_fee,
        };
        let gross = subtotal + tax + fee;
        let discount = coupon
            .filter(|amount| amount.is_sign_positive())
            .map(|amount| amount.min(gross))
            .unwrap_or(Decimal::ZERO);

        CheckoutQuote {
            subtotal,
            tax,
            fee,
            discount,
            total: gross - discount,
        }
    }
}
