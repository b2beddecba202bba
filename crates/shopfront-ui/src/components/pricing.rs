//! Price block with sale badge.

use leptos::prelude::*;
use shopfront_commerce::prelude::*;

#[component]
pub fn ProductPricing(price: PriceInfo) -> impl IntoView {
    let display = price.display();
    let badge = display.badge();

    match display.discount {
        Some(discount) => view! {
            <div class="product-pricing on-sale">
                <span class="price-current">{discount}</span>
                <span class="price-original"><s>{display.base}</s></span>
                {badge.map(|badge| view! { <span class="discount-badge">{badge}</span> })}
            </div>
        }
        .into_any(),
        None => view! {
            <div class="product-pricing">
                <span class="price-current">{display.base}</span>
            </div>
        }
        .into_any(),
    }
}
