//! Storefront configuration.

use std::time::Duration;

use serde::Deserialize;
use shopfront_commerce::prelude::*;
use thiserror::Error;

/// Configuration bundled into the browser build.
const EMBEDDED_CONFIG: &str = include_str!("../shopfront.toml");

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML did not parse or did not match the expected shape.
    #[error("Configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is unusable.
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// Demo data could not be built.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CommerceError),
}

/// Configuration for a Shopfront application.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Application name, shown in the header.
    pub name: String,
    /// Default page title.
    pub default_title: String,
    /// CSS file path.
    pub css_path: Option<String>,
    /// Currency the cart is kept in.
    pub currency: Currency,
    /// Base URL of the WordPress site behind the blog.
    pub wordpress_base_url: String,
    /// Posts shown on the blog listing.
    pub blog_posts_per_page: u32,
    /// JSON endpoint listing payment methods. `None` uses the built-in set.
    pub payment_methods_url: Option<String>,
    /// How long the add-to-cart button stays in its "added" state.
    pub added_feedback_ms: u64,
    pub shipping: ShippingPolicy,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            name: "Shopfront".to_string(),
            default_title: "Shopfront".to_string(),
            css_path: None,
            currency: Currency::USD,
            wordpress_base_url: "https://blog.example.com".to_string(),
            blog_posts_per_page: 9,
            payment_methods_url: None,
            added_feedback_ms: 1000,
            shipping: ShippingPolicy::default(),
        }
    }
}

impl StorefrontConfig {
    /// Create a new configuration with the given app name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration compiled into the build.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED_CONFIG)
    }

    /// Set the default page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    /// Set the CSS file path.
    pub fn with_css(mut self, path: impl Into<String>) -> Self {
        self.css_path = Some(path.into());
        self
    }

    pub fn with_wordpress(mut self, base_url: impl Into<String>) -> Self {
        self.wordpress_base_url = base_url.into();
        self
    }

    /// Fetch payment methods from `url` instead of the built-in set.
    pub fn with_payment_methods_url(mut self, url: impl Into<String>) -> Self {
        self.payment_methods_url = Some(url.into());
        self
    }

    pub fn with_added_feedback(mut self, window: Duration) -> Self {
        self.added_feedback_ms = u64::try_from(window.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Length of the add-to-cart "added" state.
    pub fn added_feedback(&self) -> Duration {
        Duration::from_millis(self.added_feedback_ms)
    }

    /// Check values serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.added_feedback_ms == 0 {
            return Err(ConfigError::Invalid(
                "added_feedback_ms must be positive".to_string(),
            ));
        }
        if !is_http_url(&self.wordpress_base_url) {
            return Err(ConfigError::Invalid(format!(
                "wordpress_base_url must be an http(s) URL, got {:?}",
                self.wordpress_base_url
            )));
        }
        if let Some(url) = self.payment_methods_url.as_deref().filter(|u| !is_http_url(u)) {
            return Err(ConfigError::Invalid(format!(
                "payment_methods_url must be an absolute http(s) URL, got {:?}",
                url
            )));
        }
        if let Some(threshold) = self.shipping.free_shipping_threshold {
            if threshold.currency != self.currency {
                return Err(ConfigError::Invalid(format!(
                    "free shipping threshold is in {}, store currency is {}",
                    threshold.currency.code(),
                    self.currency.code()
                )));
            }
        }
        if let (Some(min), Some(max)) = (
            self.shipping.min_delivery_days,
            self.shipping.max_delivery_days,
        ) {
            if min > max {
                return Err(ConfigError::Invalid(format!(
                    "delivery window {}-{} days is inverted",
                    min, max
                )));
            }
        }
        Ok(())
    }
}

/// Whether `url` is an absolute http(s) URL.
pub fn is_http_url(url: &str) -> bool {
    let url = url.trim();
    ["http://", "https://"]
        .iter()
        .any(|scheme| url.len() > scheme.len() && url.starts_with(scheme))
}
