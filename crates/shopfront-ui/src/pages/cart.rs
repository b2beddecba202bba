use leptos::prelude::*;
use shopfront_commerce::prelude::*;

use crate::config::StorefrontConfig;

/// Summary line under the cart total.
pub(crate) fn shipping_note(policy: &ShippingPolicy, subtotal: &Money) -> Option<String> {
    let threshold = policy.free_shipping_threshold?;
    if policy.ships_free(subtotal) {
        return Some("Your order ships free".to_string());
    }
    (threshold.currency == subtotal.currency).then(|| {
        let remaining = Money::new(threshold.amount_minor - subtotal.amount_minor, threshold.currency);
        format!("Add {} more for free shipping", remaining.display())
    })
}

/// Shopping cart page
#[component]
pub fn CartPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<Cart>>();

    view! {
        <h2>"Shopping Cart"</h2>
        {move || {
            if cart.with(Cart::is_empty) {
                view! {
                    <p>"Your cart is empty."</p>
                    <a href="/">"Continue shopping"</a>
                }
                .into_any()
            } else {
                view! { <CartView/> }.into_any()
            }
        }}
    }
}

#[component]
fn CartView() -> impl IntoView {
    let cart = expect_context::<RwSignal<Cart>>();
    let config = expect_context::<StorefrontConfig>();

    let lines = move || {
        cart.with(|c| c.lines().to_vec())
            .into_iter()
            .map(|line| {
                let subtotal = line
                    .subtotal()
                    .map(|m| m.display())
                    .unwrap_or_else(|e| e.to_string());
                let size = line.size_label.clone().map(|label| format!(" ({})", label));
                let product_id = line.product_id.clone();
                let size_id = line.size_id.clone();
                let remove = move |_| {
                    cart.update(|c| {
                        c.remove(&product_id, size_id.as_ref());
                    });
                };
                view! {
                    <div class="cart-line" style="display: flex; justify-content: space-between; padding: 1rem; border-bottom: 1px solid #eee;">
                        <div>
                            <strong>{line.product_name.clone()}</strong>
                            {size}
                            <p style="color: #666;">
                                {line.unit_price.display()} " x " {line.quantity.to_string()}
                            </p>
                        </div>
                        <div style="text-align: right;">
                            <strong>{subtotal}</strong>
                            <button type="button" class="link-button" on:click=remove>"Remove"</button>
                        </div>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    let total = move || cart.with(|c| c.total());
    let policy = config.shipping.clone();

    view! {
        <div style="max-width: 600px;">
            <p style="margin-bottom: 1rem;">
                {move || cart.with(Cart::item_count).to_string()} " item(s) in your cart"
            </p>
            {lines}
            <div style="display: flex; justify-content: space-between; padding: 1rem; font-size: 1.25rem;">
                <strong>"Total"</strong>
                <strong>
                    {move || total().map(|m| m.display()).unwrap_or_else(|e| e.to_string())}
                </strong>
            </div>
            <p class="shipping-note">
                {move || total().ok().and_then(|subtotal| shipping_note(&policy, &subtotal))}
            </p>
            <div style="margin-top: 1rem; display: flex; gap: 1rem;">
                <a href="/" style="color: #666;">"Continue Shopping"</a>
                <button
                    type="button"
                    style="background: #dc3545; color: white; border: none; padding: 0.5rem 1rem; border-radius: 4px; cursor: pointer;"
                    on:click=move |_| cart.update(Cart::clear)
                >
                    "Clear Cart"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipping_note() {
        let policy = ShippingPolicy::default();
        assert_eq!(
            shipping_note(&policy, &Money::new(5000, Currency::USD)).as_deref(),
            Some("Add $25.00 more for free shipping")
        );
        assert_eq!(
            shipping_note(&policy, &Money::new(7500, Currency::USD)).as_deref(),
            Some("Your order ships free")
        );
        assert!(shipping_note(&policy, &Money::new(7500, Currency::EUR)).is_none());

        let no_free = ShippingPolicy {
            free_shipping_threshold: None,
            ..ShippingPolicy::default()
        };
        assert!(shipping_note(&no_free, &Money::new(100, Currency::USD)).is_none());
    }
}
