//! Product price information and its display form.

use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Price fields of a product.
///
/// Invariant: when a discount is present, `0 < discount < base`, both in
/// the same currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPriceInfo")]
pub struct PriceInfo {
    base: Money,
    discount: Option<Money>,
}

#[derive(Deserialize)]
struct RawPriceInfo {
    base: Money,
    #[serde(default)]
    discount: Option<Money>,
}

impl TryFrom<RawPriceInfo> for PriceInfo {
    type Error = CommerceError;

    fn try_from(raw: RawPriceInfo) -> Result<Self, Self::Error> {
        PriceInfo::new(raw.base, raw.discount)
    }
}

impl PriceInfo {
    /// Create price info, validating the discount invariant.
    pub fn new(base: Money, discount: Option<Money>) -> Result<Self, CommerceError> {
        if !base.is_positive() {
            return Err(CommerceError::InvalidPrice(base.amount_minor));
        }
        if let Some(discount) = discount {
            if discount.currency != base.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: base.currency.code().to_string(),
                    got: discount.currency.code().to_string(),
                });
            }
            if !discount.is_positive() || discount.amount_minor >= base.amount_minor {
                return Err(CommerceError::InvalidDiscount {
                    base: base.amount_minor,
                    discount: discount.amount_minor,
                });
            }
        }
        Ok(Self { base, discount })
    }

    /// Price without discount.
    pub fn regular(base: Money) -> Result<Self, CommerceError> {
        Self::new(base, None)
    }

    /// Build from decimal amounts and an ISO currency code.
    pub fn from_decimal(
        base: f64,
        discount: Option<f64>,
        currency_code: &str,
    ) -> Result<Self, CommerceError> {
        let currency: Currency = currency_code.parse()?;
        Self::new(
            Money::from_decimal(base, currency),
            discount.map(|d| Money::from_decimal(d, currency)),
        )
    }

    pub fn base(&self) -> Money {
        self.base
    }

    pub fn discount(&self) -> Option<Money> {
        self.discount
    }

    pub fn currency(&self) -> Currency {
        self.base.currency
    }

    /// Whether a discount price applies.
    pub fn is_on_sale(&self) -> bool {
        self.discount.is_some()
    }

    /// The price a customer pays per unit.
    pub fn unit_price(&self) -> Money {
        self.discount.unwrap_or(self.base)
    }

    /// `round(100 × (1 − discount / base))`, only when discounted.
    pub fn discount_percentage(&self) -> Option<u32> {
        let discount = self.discount?;
        let base = i128::from(self.base.amount_minor);
        let saved = base - i128::from(discount.amount_minor);
        // Integer round-half-up of 100 * saved / base.
        let pct = (200 * saved + base) / (2 * base);
        u32::try_from(pct).ok()
    }

    /// Formatted strings for rendering.
    pub fn display(&self) -> PriceDisplay {
        PriceDisplay {
            base: self.base.display(),
            discount: self.discount.map(|d| d.display()),
            discount_percentage: self.discount_percentage(),
        }
    }
}

/// Display-ready price strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceDisplay {
    pub base: String,
    pub discount: Option<String>,
    pub discount_percentage: Option<u32>,
}

impl PriceDisplay {
    /// Badge text such as "-25%".
    pub fn badge(&self) -> Option<String> {
        self.discount_percentage.map(|pct| format!("-{}%", pct))
    }
}
