//! Catalog types: products, size variants, route categories.

mod category;
mod product;
mod size;

pub use category::*;
pub use product::*;
pub use size::*;
