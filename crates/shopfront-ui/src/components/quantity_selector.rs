//! Quantity stepper.

use leptos::prelude::*;
use shopfront_commerce::prelude::*;

/// Stepper with its own counter. Reports every accepted change through
/// `on_change`; the parent never pushes a value back in.
#[component]
pub fn QuantitySelector(
    #[prop(into)] on_change: Callback<u32>,
    #[prop(optional)] initial: Option<u32>,
) -> impl IntoView {
    let counter = RwSignal::new(QuantityCounter::new(initial));

    let decrement = move |_| {
        if let Some(value) = counter.try_update(QuantityCounter::decrement).flatten() {
            on_change.run(value);
        }
    };
    let increment = move |_| {
        if let Some(value) = counter.try_update(QuantityCounter::increment) {
            on_change.run(value);
        }
    };

    view! {
        <div class="quantity-selector" role="group" aria-label="Quantity">
            <button
                type="button"
                class="quantity-step"
                aria-label="Decrease quantity"
                disabled=move || !counter.with(QuantityCounter::can_decrement)
                on:click=decrement
            >
                "\u{2212}"
            </button>
            <span class="quantity-value" aria-live="polite">
                {move || counter.with(QuantityCounter::value)}
            </span>
            <button
                type="button"
                class="quantity-step"
                aria-label="Increase quantity"
                on:click=increment
            >
                "+"
            </button>
        </div>
    }
}
