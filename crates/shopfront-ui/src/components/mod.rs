//! Product and content widgets.

mod add_to_cart;
mod blog_card;
mod pricing;
mod product_link;
mod quantity_selector;
mod shipping_info;
mod size_selector;

pub use add_to_cart::{
    load_badges, AddToCartButton, AddedState, BadgeState, PaymentBadge, ResetTicket, ADDED_FEEDBACK,
    ADDED_LABEL, ADD_LABEL,
};
pub use blog_card::{BlogCard, BlogCardLayout, BASE_REVEAL_DELAY_MS, REVEAL_STEP_MS};
pub use pricing::ProductPricing;
pub use product_link::ProductLinkWrapper;
pub use quantity_selector::QuantitySelector;
pub use shipping_info::{shipping_lines, ShippingInfo};
pub use size_selector::{
    selected_readout, size_controls, SizeControl, SizeSelector, SizeSelectorVariant, OUT_OF_STOCK,
};
