//! Anchor to a product's detail page.

use leptos::prelude::*;
use shopfront_commerce::prelude::*;

/// Wraps `children` in a link to `/{category}/{id}`.
///
/// The category comes from the id prefix (`tee-`, `hat-`, `hoodie-`); any
/// other id links under `/product/`.
#[component]
pub fn ProductLinkWrapper(
    #[prop(into)] product_id: ProductId,
    children: Children,
) -> impl IntoView {
    let href = product_path(&product_id);

    view! {
        <a href=href class="product-link" data-product-id=product_id.into_inner()>
            {children()}
        </a>
    }
}
