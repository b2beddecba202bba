//! Selection state of a product detail view.
//!
//! [`QuantityCounter`] is the stepper's own counter. [`SelectionState`] is the
//! record the composing view owns and updates from selector callbacks.

use crate::catalog::SizeOption;
use crate::error::CommerceError;
use crate::ids::SizeId;

/// Smallest quantity a shopper can pick.
pub const MIN_QUANTITY: u32 = 1;

/// Bounded counter behind the quantity stepper.
///
/// Never drops below [`MIN_QUANTITY`]. Has no upper bound other than `u32`
/// saturation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityCounter {
    value: u32,
}

impl Default for QuantityCounter {
    fn default() -> Self {
        Self {
            value: MIN_QUANTITY,
        }
    }
}

impl QuantityCounter {
    /// Start from an optional initial value, clamped to the minimum.
    pub fn new(initial: Option<u32>) -> Self {
        Self {
            value: initial.unwrap_or(MIN_QUANTITY).max(MIN_QUANTITY),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn can_decrement(&self) -> bool {
        self.value > MIN_QUANTITY
    }

    /// Increase by one and return the new value.
    pub fn increment(&mut self) -> u32 {
        self.value = self.value.saturating_add(1);
        self.value
    }

    /// Decrease by one. Returns `None` and leaves the value untouched at the minimum.
    pub fn decrement(&mut self) -> Option<u32> {
        if !self.can_decrement() {
            return None;
        }
        self.value -= 1;
        Some(self.value)
    }
}

/// Caller-owned record of the chosen size and quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    size: Option<SizeOption>,
    quantity: u32,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            size: None,
            quantity: MIN_QUANTITY,
        }
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> Option<&SizeOption> {
        self.size.as_ref()
    }

    pub fn size_id(&self) -> Option<&SizeId> {
        self.size.as_ref().map(|s| &s.id)
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Record a size choice. Out-of-stock options are ignored.
    ///
    /// Returns whether the selection changed.
    pub fn select_size(&mut self, option: SizeOption) -> bool {
        if !option.in_stock || self.size_id() == Some(&option.id) {
            return false;
        }
        self.size = Some(option);
        true
    }

    /// Record a quantity reported by the stepper.
    pub fn set_quantity(&mut self, quantity: u32) -> Result<(), CommerceError> {
        if quantity < MIN_QUANTITY {
            return Err(CommerceError::InvalidQuantity(i64::from(quantity)));
        }
        self.quantity = quantity;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_defaults_to_one() {
        assert_eq!(QuantityCounter::default().value(), 1);
        assert_eq!(QuantityCounter::new(None).value(), 1);
        assert_eq!(QuantityCounter::new(Some(0)).value(), 1);
        assert_eq!(QuantityCounter::new(Some(4)).value(), 4);
    }

    #[test]
    fn test_counter_never_below_one() {
        let mut counter = QuantityCounter::new(Some(2));
        assert_eq!(counter.decrement(), Some(1));
        assert!(!counter.can_decrement());
        assert_eq!(counter.decrement(), None);
        assert_eq!(counter.value(), 1);
    }

    #[test]
    fn test_counter_action_sequence() {
        // Each accepted action reports exactly the new value.
        let mut counter = QuantityCounter::default();
        let mut reported = Vec::new();
        for step in ["+", "+", "-", "-", "-", "+", "-", "-"] {
            let result = match step {
                "+" => Some(counter.increment()),
                _ => counter.decrement(),
            };
            if let Some(v) = result {
                reported.push(v);
            }
            assert!(counter.value() >= MIN_QUANTITY);
        }
        assert_eq!(reported, vec![2, 3, 2, 1, 2, 1]);
    }

    #[test]
    fn test_counter_saturates() {
        let mut counter = QuantityCounter::new(Some(u32::MAX));
        assert_eq!(counter.increment(), u32::MAX);
    }

    #[test]
    fn test_selection_ignores_out_of_stock() {
        let mut state = SelectionState::new();
        assert!(!state.select_size(SizeOption::sold_out("l", "L")));
        assert!(state.size().is_none());

        assert!(state.select_size(SizeOption::available("m", "M")));
        assert_eq!(state.size_id().map(|s| s.as_str()), Some("m"));
        assert!(!state.select_size(SizeOption::available("m", "M")));
    }

    #[test]
    fn test_selection_quantity() {
        let mut state = SelectionState::new();
        assert_eq!(state.quantity(), 1);
        state.set_quantity(3).unwrap();
        assert_eq!(state.quantity(), 3);
        assert_eq!(state.set_quantity(0), Err(CommerceError::InvalidQuantity(0)));
        assert_eq!(state.quantity(), 3);
    }
}
