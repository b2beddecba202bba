//! Shipping and returns policy shown on product pages.

use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Store-wide shipping terms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingPolicy {
    /// Orders at or above this amount ship free. `None` disables free shipping.
    pub free_shipping_threshold: Option<Money>,
    /// Minimum delivery business days.
    pub min_delivery_days: Option<u32>,
    /// Maximum delivery business days.
    pub max_delivery_days: Option<u32>,
    /// Days a customer has to return an item.
    pub return_window_days: Option<u32>,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Some(Money::new(7500, Currency::USD)),
            min_delivery_days: Some(3),
            max_delivery_days: Some(5),
            return_window_days: Some(30),
        }
    }
}

impl ShippingPolicy {
    /// e.g. "Free shipping on orders of $75.00 or more". Matches [`Self::ships_free`].
    pub fn free_shipping_message(&self) -> Option<String> {
        self.free_shipping_threshold.map(|threshold| {
            if threshold.is_zero() {
                "Free shipping on all orders".to_string()
            } else {
                format!("Free shipping on orders of {} or more", threshold.display())
            }
        })
    }

    /// Get delivery estimate string.
    pub fn delivery_estimate(&self) -> Option<String> {
        match (self.min_delivery_days, self.max_delivery_days) {
            (Some(min), Some(max)) if min == max => Some(format!("{} business days", min)),
            (Some(min), Some(max)) => Some(format!("{}-{} business days", min, max)),
            (Some(min), None) => Some(format!("{}+ business days", min)),
            (None, Some(max)) => Some(format!("Up to {} business days", max)),
            (None, None) => None,
        }
    }

    /// e.g. "30-day returns".
    pub fn returns_message(&self) -> Option<String> {
        self.return_window_days
            .map(|days| format!("{}-day returns", days))
    }

    /// Check if an order subtotal ships free.
    pub fn ships_free(&self, subtotal: &Money) -> bool {
        self.free_shipping_threshold.is_some_and(|threshold| {
            threshold.currency == subtotal.currency && subtotal.amount_minor >= threshold.amount_minor
        })
    }
}
