//! Product detail page.
//!
//! Owns the shopper's [`SelectionState`] and wires the size selector, quantity
//! stepper, pricing and add-to-cart button around it. The cart itself lives in
//! context so the header count and cart page see every mutation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use shopfront_commerce::prelude::*;
use shopfront_observability::StructuredLogger;

use super::LoadState;
use crate::components::{
    AddToCartButton, ProductPricing, QuantitySelector, ShippingInfo, SizeSelector,
    SizeSelectorVariant,
};
use crate::config::StorefrontConfig;
use crate::lifetime::InstanceGuard;
use crate::services::Services;

/// Add the current selection of `product` to `cart`.
///
/// Refuses with [`CommerceError::SizeRequired`] when the product has sizes and
/// none is chosen.
pub fn add_selection(
    cart: &mut Cart,
    product: &Product,
    selection: &SelectionState,
) -> Result<(), CommerceError> {
    cart.add(product, selection.size_id(), selection.quantity())
}

fn size_variant(category: ProductCategory) -> SizeSelectorVariant {
    match category {
        ProductCategory::Tee => SizeSelectorVariant::Buttons,
        _ => SizeSelectorVariant::Pills,
    }
}

fn added_notice(product: &Product, selection: &SelectionState) -> String {
    match selection.size() {
        Some(size) => format!(
            "Added {} \u{00D7} {} ({}) to your cart",
            selection.quantity(),
            product.name,
            size.label
        ),
        None => format!("Added {} \u{00D7} {} to your cart", selection.quantity(), product.name),
    }
}

/// Routed at `/{category}/:id`.
#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let services = expect_context::<Services>();
    let logger = StructuredLogger::new("ProductPage");
    let guard = InstanceGuard::new();
    let (product, set_product) = signal(LoadState::<Product>::Loading);

    Effect::new({
        let guard = guard.clone();
        move |_| {
            let requested = id.get();
            set_product.set(LoadState::Loading);

            let catalog = services.catalog.clone();
            let guard = guard.clone();
            let logger = logger.clone();
            spawn_local(async move {
                let next = match catalog.product(&ProductId::new(requested.clone())).await {
                    Ok(Some(found)) => LoadState::Ready(found),
                    Ok(None) => {
                        logger
                            .info_builder("Unknown product")
                            .field("product_id", requested.clone())
                            .emit();
                        LoadState::Missing
                    }
                    Err(err) => {
                        logger
                            .error_builder("Product lookup failed")
                            .field("product_id", requested.clone())
                            .field("error", err.to_string())
                            .emit();
                        LoadState::Failed(err.to_string())
                    }
                };
                // A later navigation may have replaced the request.
                guard.run(|| {
                    if id.try_get_untracked().as_ref() == Some(&requested) {
                        set_product.try_set(next);
                    }
                });
            });
        }
    });

    on_cleanup(move || guard.dispose());

    view! {
        {move || match product.get() {
            LoadState::Loading => view! { <ProductDetailSkeleton/> }.into_any(),
            LoadState::Ready(found) => view! { <ProductDetail product=found/> }.into_any(),
            LoadState::Missing => view! {
                <div class="not-found">
                    <p>"Product not found"</p>
                    <a href="/">"Back to the shop"</a>
                </div>
            }
            .into_any(),
            LoadState::Failed(message) => view! {
                <p class="error" style="color: red;">"Error loading product: " {message}</p>
            }
            .into_any(),
        }}
    }
}

#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let cart = expect_context::<RwSignal<Cart>>();
    let config = expect_context::<StorefrontConfig>();
    let logger = StructuredLogger::new("ProductPage").with_route(product.path());

    let selection = RwSignal::new(SelectionState::new());
    let (notice, set_notice) = signal(None::<String>);
    let selected = Signal::derive(move || selection.with(|s| s.size().cloned()));
    let needs_size = product.has_sizes();
    let awaiting_size =
        Signal::derive(move || needs_size && selection.with(|s| s.size().is_none()));

    let on_select_size = move |option: SizeOption| {
        selection.update(|s| {
            s.select_size(option);
        });
        set_notice.set(None);
    };

    let on_quantity_change = {
        let logger = logger.clone();
        move |quantity: u32| {
            if let Some(Err(err)) = selection.try_update(|s| s.set_quantity(quantity)) {
                logger
                    .warn_builder("Rejected quantity")
                    .field("error", err.to_string())
                    .emit();
            }
        }
    };

    let stored = StoredValue::new(product.clone());
    let add_to_cart = move |_: ()| {
        let current = selection.get_untracked();
        let outcome = stored.with_value(|p| {
            cart.try_update(|c| add_selection(c, p, &current))
                .map(|result| result.map(|()| added_notice(p, &current)))
        });
        match outcome {
            Some(Ok(message)) => {
                logger
                    .info_builder("Added to cart")
                    .field("product_id", current_product_id(&stored))
                    .field_i64("quantity", i64::from(current.quantity()))
                    .emit();
                set_notice.set(Some(message));
            }
            Some(Err(err)) => {
                logger
                    .warn_builder("Add to cart refused")
                    .field("product_id", current_product_id(&stored))
                    .field("error", err.to_string())
                    .emit();
                set_notice.set(Some(err.to_string()));
            }
            None => {}
        }
    };

    let image = match product.image_url.clone() {
        Some(src) => view! { <img src=src alt=product.name.clone()/> }.into_any(),
        None => view! { <span style="font-size: 6rem;">"\u{1F455}"</span> }.into_any(),
    };
    let description = product
        .description
        .clone()
        .unwrap_or_else(|| "No description available.".to_string());
    let sizes = needs_size.then(|| {
        view! {
            <SizeSelector
                sizes=product.sizes.clone()
                selected=selected
                on_select_size=Callback::new(on_select_size)
                variant=size_variant(product.category())
            />
        }
    });

    view! {
        <div class="product-detail" style="display: grid; grid-template-columns: 1fr 1fr; gap: 2rem;">
            <div class="product-media">{image}</div>
            <div class="product-summary">
                <p class="product-category">{product.category().slug()}</p>
                <h1>{product.name.clone()}</h1>
                <ProductPricing price=product.price.clone()/>
                <p class="product-description">{description}</p>
                {sizes}
                <QuantitySelector on_change=Callback::new(on_quantity_change)/>
                <AddToCartButton on_click=Callback::new(add_to_cart) disabled=awaiting_size/>
                {move || notice.get().map(|text| view! { <p class="cart-notice" role="status">{text}</p> })}
                <ShippingInfo policy=config.shipping.clone()/>
            </div>
        </div>
    }
}

fn current_product_id(product: &StoredValue<Product>) -> String {
    product.with_value(|p| p.id.to_string())
}

#[component]
fn ProductDetailSkeleton() -> impl IntoView {
    view! {
        <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 2rem;">
            <div class="skeleton" style="height: 400px; border-radius: 8px;"></div>
            <div>
                <div class="skeleton" style="width: 60%; height: 2rem; margin-bottom: 1rem;"></div>
                <div class="skeleton" style="width: 30%; height: 2rem; margin-bottom: 2rem;"></div>
                <div class="skeleton" style="width: 100%; height: 4rem; margin-bottom: 1rem;"></div>
                <div class="skeleton" style="width: 150px; height: 3rem;"></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tee() -> Product {
        Product::new(
            "tee-001",
            "Logo Tee",
            PriceInfo::from_decimal(32.0, Some(24.0), "USD").unwrap(),
        )
        .with_sizes(vec![
            SizeOption::sold_out("tee-001-xs", "XS"),
            SizeOption::available("tee-001-m", "M"),
        ])
    }

    #[test]
    fn test_add_refused_without_size() {
        let mut cart = Cart::new(Currency::USD);
        let err = add_selection(&mut cart, &tee(), &SelectionState::new()).unwrap_err();
        assert!(matches!(err, CommerceError::SizeRequired(_)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_selected_size_and_quantity() {
        let product = tee();
        let mut cart = Cart::new(Currency::USD);
        let mut selection = SelectionState::new();

        assert!(!selection.select_size(product.sizes[0].clone()));
        assert!(selection.select_size(product.sizes[1].clone()));
        selection.set_quantity(3).unwrap();

        add_selection(&mut cart, &product, &selection).unwrap();
        add_selection(&mut cart, &product, &selection).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 6);
        assert_eq!(cart.total().unwrap().display(), "$144.00");
        assert_eq!(
            added_notice(&product, &selection),
            "Added 3 \u{00D7} Logo Tee (M) to your cart"
        );
    }

    #[test]
    fn test_one_size_product_ignores_size() {
        let hat = Product::new(
            "hat-001",
            "Dad Hat",
            PriceInfo::from_decimal(28.0, None, "USD").unwrap(),
        );
        let mut cart = Cart::new(Currency::USD);
        add_selection(&mut cart, &hat, &SelectionState::new()).unwrap();
        assert_eq!(cart.item_count(), 1);
        assert_eq!(size_variant(hat.category()), SizeSelectorVariant::Pills);
        assert_eq!(size_variant(ProductCategory::Tee), SizeSelectorVariant::Buttons);
    }
}
