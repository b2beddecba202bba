//! Size picker for apparel product pages.

use leptos::prelude::*;
use shopfront_commerce::prelude::*;

/// Marker shown on sold-out sizes.
pub const OUT_OF_STOCK: &str = "Out of stock";

/// Visual layout of the size controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeSelectorVariant {
    /// Grid of square buttons.
    #[default]
    Buttons,
    /// Compact row of rounded pills.
    Pills,
}

impl SizeSelectorVariant {
    fn container_class(self) -> &'static str {
        match self {
            SizeSelectorVariant::Buttons => "size-selector size-grid",
            SizeSelectorVariant::Pills => "size-selector size-pills",
        }
    }

    fn control_class(self) -> &'static str {
        match self {
            SizeSelectorVariant::Buttons => "size-button",
            SizeSelectorVariant::Pills => "size-pill",
        }
    }
}

/// Render state of one size control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeControl {
    pub option: SizeOption,
    pub selected: bool,
}

impl SizeControl {
    pub fn new(option: SizeOption, selected: Option<&SizeOption>) -> Self {
        let selected = option.is_selected_in(selected);
        Self { option, selected }
    }

    pub fn disabled(&self) -> bool {
        !self.option.in_stock
    }

    /// Accessible label, e.g. "M" or "XS (Out of stock)".
    pub fn aria_label(&self) -> String {
        if self.disabled() {
            format!("{} ({})", self.option.label, OUT_OF_STOCK)
        } else {
            self.option.label.clone()
        }
    }

    /// Handle a click: hands the option to `select` only when it is in stock.
    ///
    /// Returns whether `select` ran.
    pub fn activate(&self, select: impl FnOnce(SizeOption)) -> bool {
        if self.disabled() {
            return false;
        }
        select(self.option.clone());
        true
    }
}

/// One control per option, in catalog order.
pub fn size_controls(sizes: &[SizeOption], selected: Option<&SizeOption>) -> Vec<SizeControl> {
    sizes
        .iter()
        .cloned()
        .map(|option| SizeControl::new(option, selected))
        .collect()
}

/// Text under the controls. `None` for an empty catalog.
pub fn selected_readout(sizes: &[SizeOption], selected: Option<&SizeOption>) -> Option<String> {
    if sizes.is_empty() {
        return None;
    }
    Some(match selected {
        Some(option) => format!("Selected size: {}", option.label),
        None => "Select a size".to_string(),
    })
}

#[component]
pub fn SizeSelector(
    sizes: Vec<SizeOption>,
    #[prop(into)] selected: Signal<Option<SizeOption>>,
    #[prop(into)] on_select_size: Callback<SizeOption>,
    #[prop(optional)] variant: SizeSelectorVariant,
) -> impl IntoView {
    let readout_sizes = sizes.clone();
    let readout = (!sizes.is_empty()).then(|| {
        view! {
            <p class="size-readout">
                {move || selected.with(|s| selected_readout(&readout_sizes, s.as_ref()))}
            </p>
        }
    });

    let controls = sizes
        .into_iter()
        .map(|option| {
            let control = SizeControl::new(option, None);
            let option = control.option.clone();
            let is_selected =
                Signal::derive(move || selected.with(|s| option.is_selected_in(s.as_ref())));
            let disabled = control.disabled();
            let aria_label = control.aria_label();
            let label = control.option.label.clone();

            view! {
                <button
                    type="button"
                    class=variant.control_class()
                    class:selected=move || is_selected.get()
                    class:unavailable=disabled
                    aria-pressed=move || is_selected.get().to_string()
                    aria-label=aria_label
                    disabled=disabled
                    on:click=move |_| {
                        control.activate(|option| on_select_size.run(option));
                    }
                >
                    <span class="size-label">{label}</span>
                    {disabled.then(|| view! { <span class="size-stock">{OUT_OF_STOCK}</span> })}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="size-selector-wrapper">
            <div class=variant.container_class() role="group" aria-label="Size">
                {controls}
            </div>
            {readout}
        </div>
    }
}
