//! Product categories and the navigation paths derived from them.
//!
//! The category is inferred from the product id prefix. Only the prefixes
//! listed in [`ProductCategory::from_product_id`] are recognized; every other
//! id falls back to the generic [`ProductCategory::Product`] route. Adding a
//! category therefore requires a code change here.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Route category of a product detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Tee,
    Hat,
    Hoodie,
    /// Fallback for unrecognized id prefixes.
    Product,
}

impl ProductCategory {
    /// Every routable category, fallback last.
    pub const ALL: [ProductCategory; 4] = [
        ProductCategory::Tee,
        ProductCategory::Hat,
        ProductCategory::Hoodie,
        ProductCategory::Product,
    ];

    /// Path segment for this category.
    pub fn slug(&self) -> &'static str {
        match self {
            ProductCategory::Tee => "tee",
            ProductCategory::Hat => "hat",
            ProductCategory::Hoodie => "hoodie",
            ProductCategory::Product => "product",
        }
    }

    /// Id prefix that selects this category, if any.
    pub fn id_prefix(&self) -> Option<&'static str> {
        match self {
            ProductCategory::Tee => Some("tee-"),
            ProductCategory::Hat => Some("hat-"),
            ProductCategory::Hoodie => Some("hoodie-"),
            ProductCategory::Product => None,
        }
    }

    /// Resolve the category from a product id prefix.
    pub fn from_product_id(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.id_prefix().is_some_and(|p| id.starts_with(p)))
            .unwrap_or(ProductCategory::Product)
    }
}

/// Navigation path of a product detail page: `/{category}/{id}`.
pub fn product_path(id: &ProductId) -> String {
    let category = ProductCategory::from_product_id(id.as_str());
    format!("/{}/{}", category.slug(), id)
}
