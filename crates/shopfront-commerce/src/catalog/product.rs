//! Product type shown on a detail page.

use crate::catalog::{find_size, product_path, ProductCategory, SizeOption};
use crate::error::CommerceError;
use crate::ids::{ProductId, SizeId};
use crate::pricing::PriceInfo;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier; its prefix selects the route category.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: Option<String>,
    /// Price fields.
    pub price: PriceInfo,
    /// Ordered size catalog. Empty for one-size products.
    #[serde(default)]
    pub sizes: Vec<SizeOption>,
    /// Primary image URL.
    pub image_url: Option<String>,
}

impl Product {
    /// Create a product without sizes.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: PriceInfo) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            price,
            sizes: Vec::new(),
            image_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_sizes(mut self, sizes: Vec<SizeOption>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn category(&self) -> ProductCategory {
        ProductCategory::from_product_id(self.id.as_str())
    }

    /// Detail page path.
    pub fn path(&self) -> String {
        product_path(&self.id)
    }

    pub fn has_sizes(&self) -> bool {
        !self.sizes.is_empty()
    }

    /// Resolve a size choice for purchase.
    ///
    /// Products with sizes require an in-stock size from their own catalog.
    /// Products without sizes ignore the choice.
    pub fn purchasable_size(
        &self,
        size: Option<&SizeId>,
    ) -> Result<Option<&SizeOption>, CommerceError> {
        if !self.has_sizes() {
            return Ok(None);
        }
        let id = size.ok_or_else(|| CommerceError::SizeRequired(self.id.to_string()))?;
        let option = find_size(&self.sizes, id).ok_or_else(|| CommerceError::UnknownSize {
            product_id: self.id.to_string(),
            size: id.to_string(),
        })?;
        if !option.in_stock {
            return Err(CommerceError::SizeOutOfStock(option.label.clone()));
        }
        Ok(Some(option))
    }
}
