//! Summary

use rust_decimal::Decimal;
use serde::Serialize;

use crate::amounts::exact_sub;

/// Priced summary of a basket at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasketSummary {
    /// Comma separated `name(quantity)` entries, in product id order
    items_description: String,

    /// Sum of every line's unit price times quantity
    #[serde(with = "rust_decimal::serde::str")]
    price: Decimal,

    /// Sum of every line's unit discount times quantity
    #[serde(with = "rust_decimal::serde::str")]
    discount: Decimal,

    /// Price minus discount, unclamped
    #[serde(with = "rust_decimal::serde::str")]
    total: Decimal,
}

impl BasketSummary {
    /// Create a summary, deriving the total from price and discount.
    ///
    /// Returns `None` if the total cannot be held exactly.
    pub fn new(
        items_description: impl Into<String>,
        price: Decimal,
        discount: Decimal,
    ) -> Option<Self> {
        let total = exact_sub(price, discount)?;

        Some(Self {
            items_description: items_description.into(),
            price,
            discount,
            total,
        })
    }

    /// Summary of an empty basket.
    pub fn empty() -> Self {
        Self {
            items_description: String::new(),
            price: Decimal::ZERO,
            discount: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }

    /// Description of the basket lines
    pub fn items_description(&self) -> &str {
        &self.items_description
    }

    /// Total price before discount
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Total discount
    pub fn discount(&self) -> Decimal {
        self.discount
    }

    /// Amount payable
    pub fn total(&self) -> Decimal {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn total_is_price_minus_discount() -> TestResult {
        let summary = BasketSummary::new("Skateboard(1)", Decimal::from(10), Decimal::from(3))
            .ok_or("overflow")?;

        assert_eq!(summary.items_description(), "Skateboard(1)");
        assert_eq!(summary.price(), Decimal::from(10));
        assert_eq!(summary.discount(), Decimal::from(3));
        assert_eq!(summary.total(), Decimal::from(7));

        Ok(())
    }

    #[test]
    fn total_is_not_clamped() -> TestResult {
        let summary = BasketSummary::new("Skateboard(1)", Decimal::from(10), Decimal::from(20))
            .ok_or("overflow")?;

        assert_eq!(summary.total(), Decimal::from(-10));

        Ok(())
    }

    #[test]
    fn overflowing_total_is_none() {
        assert!(BasketSummary::new("", Decimal::MAX, Decimal::MIN).is_none());
    }

    #[test]
    fn rounded_total_is_none() {
        let price = Decimal::from_i128_with_scale(10_i128.pow(28), 0);

        assert!(BasketSummary::new("", price, Decimal::new(3, 1)).is_none());
    }

    #[test]
    fn empty_summary_is_all_zero() {
        let summary = BasketSummary::empty();

        assert_eq!(summary.items_description(), "");
        assert_eq!(summary.price(), Decimal::ZERO);
        assert_eq!(summary.discount(), Decimal::ZERO);
        assert_eq!(summary.total(), Decimal::ZERO);
    }

    #[test]
    fn serializes_amounts_as_decimal_strings() -> TestResult {
        let summary = BasketSummary::new("Helmet(3)", Decimal::new(6030, 2), Decimal::new(1, 1))
            .ok_or("overflow")?;

        let json = serde_json::to_value(&summary)?;

        assert_eq!(
            json,
            serde_json::json!({
                "items_description": "Helmet(3)",
                "price": "60.30",
                "discount": "0.1",
                "total": "60.20",
            })
        );

        Ok(())
    }
}
