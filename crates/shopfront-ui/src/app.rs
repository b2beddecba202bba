//! Application shell and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use shopfront_commerce::prelude::*;

use crate::config::StorefrontConfig;
use crate::pages::{
    BlogPage, BlogPostPage, CartPage, HomePage, NotFound, ProductPage, WordPressTestPage,
};
use crate::services::Services;

// ============================================================================
// App Component
// ============================================================================

/// Root component. Provides configuration, services and the cart to every page.
#[component]
pub fn App(config: StorefrontConfig, services: Services) -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(Cart::new(config.currency)));
    provide_context(services);
    provide_context(config.clone());

    let fallback = || view! { <NotFound/> }.into_view();
    let stylesheet = config
        .css_path
        .clone()
        .map(|href| view! { <Stylesheet id="shopfront" href=href/> });

    view! {
        {stylesheet}
        <Meta name="description" content=format!("{} merch store", config.name)/>
        <Title text=config.default_title.clone()/>

        <Router>
            <Header name=config.name.clone()/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/tee/:id") view=ProductPage/>
                    <Route path=path!("/hat/:id") view=ProductPage/>
                    <Route path=path!("/hoodie/:id") view=ProductPage/>
                    <Route path=path!("/product/:id") view=ProductPage/>
                    <Route path=path!("/cart") view=CartPage/>
                    <Route path=path!("/blog") view=BlogPage/>
                    <Route path=path!("/blog/:slug") view=BlogPostPage/>
                    <Route path=path!("/wordpress-test") view=WordPressTestPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header(name: String) -> impl IntoView {
    let cart = expect_context::<RwSignal<Cart>>();

    view! {
        <header>
            <h1><a href="/">{name}</a></h1>
            <nav>
                <a href="/">"Shop"</a>
                <a href="/blog">"Blog"</a>
                <a href="/cart">
                    "Cart (" {move || cart.with(Cart::item_count).to_string()} ")"
                </a>
            </nav>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>"Built with Leptos"</p>
            <p style="font-size: 0.8rem; color: #888;">
                <a href="/wordpress-test">"WordPress connection test"</a>
            </p>
        </footer>
    }
}
