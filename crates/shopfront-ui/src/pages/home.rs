use leptos::prelude::*;
use leptos::task::spawn_local;
use shopfront_commerce::catalog::any_in_stock;
use shopfront_commerce::prelude::*;
use shopfront_observability::StructuredLogger;

use super::LoadState;
use crate::components::{ProductLinkWrapper, ProductPricing};
use crate::config::StorefrontConfig;
use crate::lifetime::InstanceGuard;
use crate::services::Services;

/// Home page with hero section and product grid
#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<StorefrontConfig>();
    let services = expect_context::<Services>();
    let logger = StructuredLogger::new("HomePage").with_route("/");
    let guard = InstanceGuard::new();
    let (products, set_products) = signal(LoadState::<Vec<Product>>::Loading);

    {
        let guard = guard.clone();
        let catalog = services.catalog.clone();
        spawn_local(async move {
            let next = match catalog.products().await {
                Ok(list) => LoadState::Ready(list),
                Err(err) => {
                    logger
                        .error_builder("Catalog listing failed")
                        .field("error", err.to_string())
                        .emit();
                    LoadState::Failed(err.to_string())
                }
            };
            guard.run(|| set_products.try_set(next));
        });
    }
    on_cleanup(move || guard.dispose());

    view! {
        <div class="hero">
            <h2>{format!("Welcome to {}", config.name)}</h2>
            <a href="/blog" class="btn" style="margin-top: 1rem; display: inline-block;">
                "Read the blog"
            </a>
        </div>

        <h2>"Featured Products"</h2>
        {move || match products.get() {
            LoadState::Ready(list) => view! {
                <div class="products">
                    {list
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product/> })
                        .collect::<Vec<_>>()}
                </div>
            }
            .into_any(),
            LoadState::Failed(message) => view! {
                <p style="color: red;">"Error loading products: " {message}</p>
            }
            .into_any(),
            LoadState::Loading | LoadState::Missing => view! { <ProductGridSkeleton/> }.into_any(),
        }}
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let sold_out = product.has_sizes() && !any_in_stock(&product.sizes);
    let Product {
        id,
        name,
        price,
        image_url,
        ..
    } = product;

    view! {
        <div class="product-card">
            <ProductLinkWrapper product_id=id>
                <div style="width: 100%; height: 200px; background: #f0f0f0; display: flex; align-items: center; justify-content: center;">
                    {image_url.map(|src| view! { <img src=src alt="" loading="lazy"/> })}
                </div>
                <div class="product-info">
                    <h3>{name}</h3>
                    <ProductPricing price=price/>
                    {sold_out.then(|| view! { <p style="font-size: 0.8rem; color: #666;">"Sold out"</p> })}
                </div>
            </ProductLinkWrapper>
        </div>
    }
}

#[component]
fn ProductGridSkeleton() -> impl IntoView {
    view! {
        <div class="products">
            <ProductCardSkeleton/>
            <ProductCardSkeleton/>
            <ProductCardSkeleton/>
            <ProductCardSkeleton/>
        </div>
    }
}

#[component]
fn ProductCardSkeleton() -> impl IntoView {
    view! {
        <div class="product-card">
            <div class="skeleton" style="width: 100%; height: 200px;"></div>
            <div class="product-info">
                <div class="skeleton" style="width: 80%; height: 1.5rem; margin-bottom: 0.5rem;"></div>
                <div class="skeleton" style="width: 40%; height: 1.25rem;"></div>
            </div>
        </div>
    }
}
