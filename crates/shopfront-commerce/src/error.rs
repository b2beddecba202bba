//! Commerce error types.

use thiserror::Error;

/// Errors that can occur when building or mutating storefront domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Size is not part of the product's catalog.
    #[error("Size {size} not offered for product {product_id}")]
    UnknownSize { product_id: String, size: String },

    /// Size exists but cannot be purchased.
    #[error("Size {0} is out of stock")]
    SizeOutOfStock(String),

    /// Product offers sizes but none was chosen.
    #[error("A size must be selected for product {0}")]
    SizeRequired(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Price must be strictly positive.
    #[error("Invalid price: {0} minor units")]
    InvalidPrice(i64),

    /// Discount price violates `0 < discount < base`.
    #[error("Discount price {discount} must be positive and below base price {base}")]
    InvalidDiscount { base: i64, discount: i64 },

    /// Unknown ISO currency code.
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
