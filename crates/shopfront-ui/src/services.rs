//! Services injected into components through context.

use std::sync::Arc;

use shopfront_data::{
    CatalogSource, FetchClient, HttpPaymentMethods, PaymentMethodService, PaymentMethods,
    StaticCatalog, StaticPaymentMethods, WordPressClient, PAYPAL, STRIPE,
};
use shopfront_observability::StructuredLogger;

use crate::config::{ConfigError, StorefrontConfig};

/// Data services shared by every page.
#[derive(Clone)]
pub struct Services {
    pub payments: Arc<dyn PaymentMethodService + Send + Sync>,
    pub catalog: Arc<dyn CatalogSource + Send + Sync>,
    pub wordpress: WordPressClient,
}

impl Services {
    pub fn new(
        payments: Arc<dyn PaymentMethodService + Send + Sync>,
        catalog: Arc<dyn CatalogSource + Send + Sync>,
        wordpress: WordPressClient,
    ) -> Self {
        Self {
            payments,
            catalog,
            wordpress,
        }
    }

    /// Wire services from configuration, using the demo catalog.
    ///
    /// The catalog must be priced in the store currency, otherwise no product
    /// could be added to the cart.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self, ConfigError> {
        let payments: Arc<dyn PaymentMethodService + Send + Sync> =
            match &config.payment_methods_url {
                Some(url) => Arc::new(HttpPaymentMethods::new(FetchClient::new(), url.clone())),
                None => Arc::new(StaticPaymentMethods::new(PaymentMethods::new([
                    STRIPE, PAYPAL,
                ]))),
            };
        let catalog = StaticCatalog::demo()?;
        if let Some(product) = catalog.priced_outside(config.currency) {
            return Err(ConfigError::Invalid(format!(
                "product {} is priced in {}, store currency is {}",
                product.id,
                product.price.currency().code(),
                config.currency.code()
            )));
        }

        let wordpress = WordPressClient::new(config.wordpress_base_url.clone())
            .with_logger(StructuredLogger::new("WordPressClient").with_route("/blog"));

        Ok(Self::new(
            payments,
            Arc::new(catalog),
            wordpress,
        ))
    }
}
