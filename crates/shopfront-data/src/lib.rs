//! Data services for Shopfront.
//!
//! Everything the view layer reads from outside the browser tab goes
//! through this crate:
//!
//! - [`PaymentMethodService`] - which checkout options exist, for badges
//! - [`WordPressClient`] - blog posts and the REST connectivity check
//! - [`CatalogSource`] - products by id for detail pages
//!
//! Services are `?Send` async traits so that the same implementations run on
//! the browser's single-threaded executor and under `tokio` in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_data::{WordPressClient, ConnectivityStatus};
//!
//! let wp = WordPressClient::new("https://blog.example.com");
//! let report = wp.check_connectivity().await;
//! for check in &report.checks {
//!     println!("{}: {}", check.name, check.status);
//! }
//! ```

mod blog;
mod catalog;
mod client;
mod error;
mod payment;
mod wordpress;

pub use blog::{html_paragraphs, html_to_text, BlogPost};
pub use catalog::{CatalogSource, StaticCatalog};
pub use client::{FetchClient, ProbeResponse, REQUEST_TIMEOUT};
pub use error::FetchError;
pub use payment::{
    parse_payment_methods, HttpPaymentMethods, PaymentMethodService, PaymentMethods,
    StaticPaymentMethods, PAYPAL, STRIPE,
};
pub use wordpress::{
    ConnectivityReport, ConnectivityStatus, EndpointCheck, WordPressClient, MAX_PER_PAGE,
};
