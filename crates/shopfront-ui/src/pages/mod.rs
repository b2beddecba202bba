//! Routed pages.

mod blog;
mod cart;
mod home;
mod not_found;
mod product;
mod wordpress_test;

pub use blog::{BlogPage, BlogPostPage};
pub use cart::CartPage;
pub use home::HomePage;
pub use not_found::NotFound;
pub use product::{add_selection, ProductPage};
pub use wordpress_test::{normalize_base_url, WordPressTestPage};

/// Progress of a page's initial data load.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
    /// The requested record does not exist.
    Missing,
    Failed(String),
}
