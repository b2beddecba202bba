//! Size variants offered for a product.

use crate::ids::SizeId;
use serde::{Deserialize, Serialize};

/// A selectable size variant.
///
/// Immutable once supplied by the catalog. Two options with the same label
/// but different ids are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeOption {
    /// Unique identity within the product.
    pub id: SizeId,
    /// Display label (e.g., "M").
    pub label: String,
    /// Whether this size can be purchased.
    pub in_stock: bool,
}

impl SizeOption {
    pub fn new(id: impl Into<SizeId>, label: impl Into<String>, in_stock: bool) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            in_stock,
        }
    }

    /// Shorthand for an in-stock option.
    pub fn available(id: impl Into<SizeId>, label: impl Into<String>) -> Self {
        Self::new(id, label, true)
    }

    /// Shorthand for an out-of-stock option.
    pub fn sold_out(id: impl Into<SizeId>, label: impl Into<String>) -> Self {
        Self::new(id, label, false)
    }

    /// Identity comparison against an optional selection.
    pub fn is_selected_in(&self, selected: Option<&SizeOption>) -> bool {
        selected.is_some_and(|s| s.id == self.id)
    }
}

/// Find an option by identity.
pub fn find_size<'a>(sizes: &'a [SizeOption], id: &SizeId) -> Option<&'a SizeOption> {
    sizes.iter().find(|s| &s.id == id)
}

/// Whether any option in the catalog can be purchased.
pub fn any_in_stock(sizes: &[SizeOption]) -> bool {
    sizes.iter().any(|s| s.in_stock)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<SizeOption> {
        vec![
            SizeOption::available("s", "S"),
            SizeOption::available("m", "M"),
            SizeOption::sold_out("l", "L"),
        ]
    }

    #[test]
    fn test_selection_compares_identity_not_label() {
        let a = SizeOption::available("m-regular", "M");
        let b = SizeOption::available("m-tall", "M");

        assert!(a.is_selected_in(Some(&a)));
        assert!(!a.is_selected_in(Some(&b)));
        assert!(!a.is_selected_in(None));
    }

    #[test]
    fn test_find_size() {
        let sizes = catalog();
        assert_eq!(find_size(&sizes, &SizeId::new("m")).map(|s| s.label.as_str()), Some("M"));
        assert!(find_size(&sizes, &SizeId::new("xl")).is_none());
    }

    #[test]
    fn test_any_in_stock() {
        assert!(any_in_stock(&catalog()));
        assert!(!any_in_stock(&[SizeOption::sold_out("l", "L")]));
        assert!(!any_in_stock(&[]));
    }
}
