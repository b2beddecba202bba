//! Shopfront storefront UI
//!
//! Leptos components for product detail pages and the blog:
//! - Size and quantity selection feeding a page-owned selection state
//! - Pricing with sale badges
//! - Add-to-cart button with timed confirmation and payment badges
//! - Category-aware product links
//! - Blog cards and a WordPress REST connectivity test

mod app;
mod components;
mod config;
mod lifetime;
mod pages;
mod services;
mod telemetry;

pub use app::App;
pub use components::*;
pub use config::{is_http_url, ConfigError, StorefrontConfig};
pub use lifetime::InstanceGuard;
pub use pages::{
    add_selection, normalize_base_url, BlogPage, BlogPostPage, CartPage, HomePage, LoadState,
    NotFound, ProductPage, WordPressTestPage,
};
pub use services::Services;
pub use telemetry::{init_console_logging, ConsoleLevel, ConsoleMakeWriter, ConsoleWriter};

/// Load the embedded configuration and wire services for it.
pub fn bootstrap() -> Result<(StorefrontConfig, Services), ConfigError> {
    let config = StorefrontConfig::embedded()?;
    let services = Services::from_config(&config)?;
    Ok((config, services))
}

#[cfg(any(feature = "csr", feature = "hydrate"))]
fn start(mount: impl FnOnce(StorefrontConfig, Services)) {
    use shopfront_observability::StructuredLogger;

    console_error_panic_hook::set_once();
    if init_console_logging(tracing::Level::INFO).is_err() {
        leptos::logging::warn!("tracing subscriber already installed");
    }
    match bootstrap() {
        Ok((config, services)) => mount(config, services),
        Err(err) => {
            let message = format!("Shopfront failed to start: {err}");
            StructuredLogger::new("Shopfront")
                .error_builder(message.clone())
                .emit();
            leptos::logging::error!("{}", message);
        }
    }
}

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    use leptos::prelude::*;

    start(|config, services| {
        leptos::mount::mount_to_body(move || view! { <App config=config services=services/> })
    });
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    start(|config, services| {
        leptos::mount::hydrate_body(move || view! { <App config=config services=services/> })
    });
}
