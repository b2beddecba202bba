//! Storefront domain types for Shopfront.
//!
//! This crate holds everything the product detail widgets derive their
//! output from, with no UI dependency:
//!
//! - **Catalog**: products, size variants, id-prefix route categories
//! - **Pricing**: validated base/discount prices and their display strings
//! - **Selection**: the quantity stepper's counter and the page's selection state
//! - **Cart**: the in-memory cart the product page mutates
//! - **Shipping**: store shipping and returns terms
//!
//! # Example
//!
//! ```rust
//! use shopfront_commerce::prelude::*;
//!
//! let price = PriceInfo::from_decimal(100.0, Some(75.0), "USD").unwrap();
//! assert_eq!(price.discount_percentage(), Some(25));
//!
//! let product = Product::new("tee-001", "Logo Tee", price)
//!     .with_sizes(vec![SizeOption::available("tee-001-m", "M")]);
//! assert_eq!(product.path(), "/tee/tee-001");
//!
//! let mut cart = Cart::new(Currency::USD);
//! cart.add(&product, Some(&SizeId::new("tee-001-m")), 2).unwrap();
//! assert_eq!(cart.total().unwrap().display(), "$150.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod pricing;
pub mod selection;
pub mod shipping;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    pub use crate::cart::{Cart, CartLine, MAX_QUANTITY_PER_LINE};
    pub use crate::catalog::{product_path, Product, ProductCategory, SizeOption};
    pub use crate::pricing::{PriceDisplay, PriceInfo};
    pub use crate::selection::{QuantityCounter, SelectionState, MIN_QUANTITY};
    pub use crate::shipping::ShippingPolicy;
}
