//! Shipping and returns summary.

use leptos::prelude::*;
use shopfront_commerce::prelude::*;

/// Lines shown by [`ShippingInfo`], in display order.
pub fn shipping_lines(policy: &ShippingPolicy) -> Vec<String> {
    [
        policy.free_shipping_message(),
        policy
            .delivery_estimate()
            .map(|estimate| format!("Delivery in {}", estimate)),
        policy.returns_message(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[component]
pub fn ShippingInfo(policy: ShippingPolicy) -> impl IntoView {
    let lines = shipping_lines(&policy);

    (!lines.is_empty()).then(|| {
        view! {
            <ul class="shipping-info">
                {lines
                    .into_iter()
                    .map(|line| view! { <li>{line}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        }
    })
}
