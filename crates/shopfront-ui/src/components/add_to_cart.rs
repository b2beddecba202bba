//! Add-to-cart button with transient confirmation and payment badges.
//!
//! Two independent async streams hang off each button instance:
//!
//! - the payment-method lookup, started once on mount
//! - the reset timer, re-armed on every click
//!
//! Both check an [`InstanceGuard`] before writing state, and the pending timer
//! is cleared when the button is unmounted.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use shopfront_data::{PaymentMethodService, PaymentMethods};
use shopfront_observability::StructuredLogger;

use crate::config::StorefrontConfig;
use crate::lifetime::InstanceGuard;
use crate::services::Services;

/// Default length of the "added" state.
pub const ADDED_FEEDBACK: Duration = Duration::from_millis(1000);

pub const ADD_LABEL: &str = "Add to Cart";
pub const ADDED_LABEL: &str = "Added to Cart!";

/// Identifies the click that armed a reset timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket(u64);

/// Idle/Added state machine of the button.
///
/// Every activation bumps a generation counter and hands out a ticket. Only the
/// ticket from the most recent activation can return the button to idle, so
/// the added window always runs from the latest click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddedState {
    generation: u64,
    added: bool,
}

impl AddedState {
    pub fn is_added(&self) -> bool {
        self.added
    }

    /// Enter (or stay in) the added state.
    pub fn activate(&mut self) -> ResetTicket {
        self.generation = self.generation.wrapping_add(1);
        self.added = true;
        ResetTicket(self.generation)
    }

    /// Timer callback. Returns to idle if `ticket` is still current.
    pub fn expire(&mut self, ticket: ResetTicket) -> bool {
        if self.added && ticket.0 == self.generation {
            self.added = false;
            return true;
        }
        false
    }

    pub fn label(&self) -> &'static str {
        if self.added {
            ADDED_LABEL
        } else {
            ADD_LABEL
        }
    }

    pub fn class(&self) -> &'static str {
        if self.added {
            "add-to-cart-button added"
        } else {
            "add-to-cart-button"
        }
    }
}

/// Badge shown under the button for an available checkout option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentBadge {
    /// Credit-card glyph, shown for Stripe.
    Card,
    PayPal,
}

impl PaymentBadge {
    pub fn for_methods(methods: &PaymentMethods) -> Vec<PaymentBadge> {
        let mut badges = Vec::new();
        if methods.has_stripe() {
            badges.push(PaymentBadge::Card);
        }
        if methods.has_paypal() {
            badges.push(PaymentBadge::PayPal);
        }
        badges
    }
}

/// Progress of the payment-method lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BadgeState {
    #[default]
    Pending,
    Ready(PaymentMethods),
    Failed,
}

impl BadgeState {
    /// Badges to render. Empty while pending and after a failure.
    pub fn badges(&self) -> Vec<PaymentBadge> {
        match self {
            BadgeState::Ready(methods) => PaymentBadge::for_methods(methods),
            BadgeState::Pending | BadgeState::Failed => Vec::new(),
        }
    }
}

/// Ask `service` for payment methods. Failures are logged and yield
/// [`BadgeState::Failed`], which renders no badges.
pub async fn load_badges(
    service: &(dyn PaymentMethodService + Send + Sync),
    logger: &StructuredLogger,
) -> BadgeState {
    match service.available_methods().await {
        Ok(methods) => BadgeState::Ready(methods),
        Err(err) => {
            logger
                .warn_builder("Payment methods unavailable")
                .field("error", err.to_string())
                .emit();
            BadgeState::Failed
        }
    }
}

#[component]
pub fn AddToCartButton(
    /// The cart mutation, run before the button shows its added state.
    #[prop(into)]
    on_click: Callback<()>,
    #[prop(optional)] disabled: Option<Signal<bool>>,
) -> impl IntoView {
    let services = expect_context::<Services>();
    let window = use_context::<StorefrontConfig>()
        .map(|config| config.added_feedback())
        .unwrap_or(ADDED_FEEDBACK);
    let logger = StructuredLogger::new("AddToCartButton");
    let guard = InstanceGuard::new();

    let (state, set_state) = signal(AddedState::default());
    let (badges, set_badges) = signal(BadgeState::Pending);
    let pending_reset = StoredValue::new(None::<TimeoutHandle>);

    {
        let guard = guard.clone();
        let logger = logger.clone();
        let payments = services.payments.clone();
        spawn_local(async move {
            let next = load_badges(payments.as_ref(), &logger).await;
            guard.run(|| set_badges.try_set(next));
        });
    }

    on_cleanup({
        let guard = guard.clone();
        move || {
            guard.dispose();
            if let Some(handle) = pending_reset.try_get_value().flatten() {
                handle.clear();
            }
        }
    });

    let is_disabled = move || disabled.is_some_and(|d| d.get());

    let handle_click = move |_| {
        on_click.run(());
        let Some(ticket) = set_state.try_update(AddedState::activate) else {
            return;
        };

        if let Some(previous) = pending_reset.try_get_value().flatten() {
            previous.clear();
        }
        let timer_guard = guard.clone();
        let reset = move || {
            timer_guard.run(|| set_state.try_update(|s| s.expire(ticket)));
        };
        match set_timeout_with_handle(reset, window) {
            Ok(handle) => {
                pending_reset.try_set_value(Some(handle));
            }
            Err(_) => {
                logger.error("Could not schedule add-to-cart reset");
                set_state.try_update(|s| s.expire(ticket));
            }
        }
    };

    view! {
        <div class="add-to-cart">
            <button
                type="button"
                class=move || state.with(AddedState::class)
                disabled=is_disabled
                on:click=handle_click
            >
                {move || state.with(AddedState::label)}
            </button>
            <div class="payment-badges" aria-label="Accepted payment methods">
                {move || {
                    badges
                        .with(BadgeState::badges)
                        .into_iter()
                        .map(|badge| match badge {
                            PaymentBadge::Card => view! {
                                <span class="payment-badge card" title="Credit card" aria-label="Credit card">
                                    "\u{1F4B3}"
                                </span>
                            }
                            .into_any(),
                            PaymentBadge::PayPal => view! {
                                <span class="payment-badge paypal">"PayPal"</span>
                            }
                            .into_any(),
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
