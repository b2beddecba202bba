//! Product lookup for detail pages.

use async_trait::async_trait;
use shopfront_commerce::prelude::*;

/// Source of products by id.
#[async_trait(?Send)]
pub trait CatalogSource {
    /// `Ok(None)` when the id is unknown.
    async fn product(&self, id: &ProductId) -> Result<Option<Product>, CommerceError>;

    /// Products for listing pages, in display order.
    async fn products(&self) -> Result<Vec<Product>, CommerceError>;
}

/// In-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The merch line used by the demo storefront.
    pub fn demo() -> Result<Self, CommerceError> {
        let apparel_sizes = |prefix: &str, sold_out: &[&str]| -> Vec<SizeOption> {
            ["XS", "S", "M", "L", "XL"]
                .into_iter()
                .map(|label| {
                    SizeOption::new(
                        format!("{}-{}", prefix, label.to_lowercase()),
                        label,
                        !sold_out.contains(&label),
                    )
                })
                .collect()
        };

        Ok(Self::new(vec![
            Product::new(
                "tee-001",
                "Classic Logo Tee",
                PriceInfo::from_decimal(32.0, Some(24.0), "USD")?,
            )
            .with_description("Heavyweight cotton tee with a screen-printed chest logo.")
            .with_sizes(apparel_sizes("tee-001", &["XS"]))
            .with_image("/images/tee-001.jpg"),
            Product::new(
                "hoodie-001",
                "Midweight Pullover Hoodie",
                PriceInfo::from_decimal(68.0, None, "USD")?,
            )
            .with_description("Brushed fleece hoodie with a kangaroo pocket.")
            .with_sizes(apparel_sizes("hoodie-001", &["XL", "XS"]))
            .with_image("/images/hoodie-001.jpg"),
            Product::new(
                "hat-001",
                "Embroidered Dad Hat",
                PriceInfo::from_decimal(28.0, Some(21.0), "USD")?,
            )
            .with_description("Unstructured six-panel cap, one size fits most.")
            .with_image("/images/hat-001.jpg"),
            Product::new(
                "sticker-pack",
                "Sticker Pack",
                PriceInfo::from_decimal(6.0, None, "USD")?,
            )
            .with_description("Five vinyl stickers."),
        ]))
    }

    /// First product whose price is not in `currency`.
    pub fn priced_outside(&self, currency: Currency) -> Option<&Product> {
        self.products
            .iter()
            .find(|product| product.price.currency() != currency)
    }
}

#[async_trait(?Send)]
impl CatalogSource for StaticCatalog {
    async fn product(&self, id: &ProductId) -> Result<Option<Product>, CommerceError> {
        Ok(self.products.iter().find(|p| &p.id == id).cloned())
    }

    async fn products(&self) -> Result<Vec<Product>, CommerceError> {
        Ok(self.products.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_catalog_lookup() {
        let catalog = StaticCatalog::demo().unwrap();

        let tee = catalog.product(&ProductId::new("tee-001")).await.unwrap().unwrap();
        assert_eq!(tee.category(), ProductCategory::Tee);
        assert_eq!(tee.sizes.len(), 5);
        assert!(!tee.sizes[0].in_stock);
        assert_eq!(tee.price.discount_percentage(), Some(25));

        assert!(catalog.product(&ProductId::new("tee-404")).await.unwrap().is_none());
    }

    #[test]
    fn test_priced_outside() {
        let catalog = StaticCatalog::demo().unwrap();
        assert!(catalog.priced_outside(Currency::USD).is_none());
        let foreign = catalog.priced_outside(Currency::EUR).unwrap();
        assert_eq!(foreign.id, ProductId::new("tee-001"));
        assert!(StaticCatalog::default().priced_outside(Currency::EUR).is_none());
    }

    #[tokio::test]
    async fn test_demo_catalog_routes() {
        let catalog = StaticCatalog::demo().unwrap();
        let paths: Vec<String> = catalog
            .products()
            .await
            .unwrap()
            .iter()
            .map(Product::path)
            .collect();
        assert_eq!(
            paths,
            vec!["/tee/tee-001", "/hoodie/hoodie-001", "/hat/hat-001", "/product/sticker-pack"]
        );
    }
}
