//! In-memory shopping cart mutated by the product page.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{ProductId, SizeId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per cart line.
pub const MAX_QUANTITY_PER_LINE: u32 = 9999;

/// A product/size pair with its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub product_name: String,
    pub size_id: Option<SizeId>,
    pub size_label: Option<String>,
    pub quantity: u32,
    pub unit_price: Money,
}

impl CartLine {
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.unit_price.checked_multiply(i64::from(self.quantity))
    }

    fn matches(&self, product_id: &ProductId, size_id: Option<&SizeId>) -> bool {
        &self.product_id == product_id && self.size_id.as_ref() == size_id
    }
}

/// A shopping cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: Currency,
}

impl Cart {
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a product in the given size and quantity.
    ///
    /// Returns an error if:
    /// - quantity is zero
    /// - the size choice is not purchasable for this product
    /// - the product is priced in another currency
    /// - the merged line would exceed [`MAX_QUANTITY_PER_LINE`]
    pub fn add(
        &mut self,
        product: &Product,
        size: Option<&SizeId>,
        quantity: u32,
    ) -> Result<(), CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(0));
        }
        let size = product.purchasable_size(size)?;
        let unit_price = product.price.unit_price();
        if unit_price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: unit_price.currency.code().to_string(),
            });
        }

        let size_id = size.map(|s| s.id.clone());
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.matches(&product.id, size_id.as_ref()))
        {
            let merged = line
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            check_limit(merged)?;
            line.quantity = merged;
            line.unit_price = unit_price;
            return Ok(());
        }

        check_limit(quantity)?;
        self.lines.push(CartLine {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            size_id,
            size_label: size.map(|s| s.label.clone()),
            quantity,
            unit_price,
        });
        Ok(())
    }

    /// Remove a line. Returns whether anything was removed.
    pub fn remove(&mut self, product_id: &ProductId, size_id: Option<&SizeId>) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| !l.matches(product_id, size_id));
        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total number of units across lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn total(&self) -> Result<Money, CommerceError> {
        self.lines
            .iter()
            .try_fold(Money::zero(self.currency), |acc, line| {
                acc.try_add(&line.subtotal()?)
            })
    }
}

fn check_limit(quantity: u32) -> Result<(), CommerceError> {
    if quantity > MAX_QUANTITY_PER_LINE {
        return Err(CommerceError::QuantityExceedsLimit(
            i64::from(quantity),
            i64::from(MAX_QUANTITY_PER_LINE),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SizeOption;
    use crate::pricing::PriceInfo;

    fn tee() -> Product {
        Product::new(
            "tee-001",
            "Logo Tee",
            PriceInfo::from_decimal(30.0, Some(24.0), "USD").unwrap(),
        )
        .with_sizes(vec![
            SizeOption::available("m", "M"),
            SizeOption::available("l", "L"),
            SizeOption::sold_out("xl", "XL"),
        ])
    }

    #[test]
    fn test_add_merges_same_size() {
        let mut cart = Cart::new(Currency::USD);
        let product = tee();
        let m = SizeId::new("m");

        cart.add(&product, Some(&m), 1).unwrap();
        cart.add(&product, Some(&m), 2).unwrap();
        cart.add(&product, Some(&SizeId::new("l")), 1).unwrap();

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.item_count(), 4);
        // Discounted unit price applies.
        assert_eq!(cart.total().unwrap().amount_minor, 4 * 2400);
    }

    #[test]
    fn test_add_rejects_invalid() {
        let mut cart = Cart::new(Currency::USD);
        let product = tee();

        assert_eq!(
            cart.add(&product, Some(&SizeId::new("m")), 0),
            Err(CommerceError::InvalidQuantity(0))
        );
        assert_eq!(
            cart.add(&product, None, 1),
            Err(CommerceError::SizeRequired("tee-001".to_string()))
        );
        assert_eq!(
            cart.add(&product, Some(&SizeId::new("xl")), 1),
            Err(CommerceError::SizeOutOfStock("XL".to_string()))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_enforces_limit() {
        let mut cart = Cart::new(Currency::USD);
        let product = tee();
        let m = SizeId::new("m");

        cart.add(&product, Some(&m), MAX_QUANTITY_PER_LINE).unwrap();
        assert!(matches!(
            cart.add(&product, Some(&m), 1),
            Err(CommerceError::QuantityExceedsLimit(10000, 9999))
        ));
    }

    #[test]
    fn test_add_rejects_other_currency() {
        let mut cart = Cart::new(Currency::EUR);
        assert!(matches!(
            cart.add(&tee(), Some(&SizeId::new("m")), 1),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::new(Currency::USD);
        let product = tee();
        cart.add(&product, Some(&SizeId::new("m")), 1).unwrap();
        cart.add(&product, Some(&SizeId::new("l")), 1).unwrap();

        assert!(cart.remove(&product.id, Some(&SizeId::new("m"))));
        assert!(!cart.remove(&product.id, Some(&SizeId::new("m"))));
        assert_eq!(cart.lines().len(), 1);

        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.total().unwrap().is_zero());
    }
}
