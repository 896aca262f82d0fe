//! Products

use rust_decimal::Decimal;
use serde::Serialize;

/// Pricing information for a single product, as held by a catalog.
///
/// `price` and `discount` are per-unit amounts. Neither is validated: a
/// negative value, or a discount larger than the price, is carried through
/// checkout unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductInfo {
    id: String,
    name: String,
    #[serde(with = "rust_decimal::serde::str")]
    price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    discount: Decimal,
}

impl ProductInfo {
    /// Create product info from its id, display name and per-unit amounts.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        discount: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            discount,
        }
    }

    /// Product id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Product name, as shown in a basket description
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Per-unit price
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Per-unit discount
    pub fn discount(&self) -> Decimal {
        self.discount
    }
}
