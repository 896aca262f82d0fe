//! Product Fixtures

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{fixtures::FixtureError, products::ProductInfo};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Map of product id -> product fixture, `~` for an absent entry
    pub products: FxHashMap<String, Option<ProductFixture>>,
}

/// Product fixture from YAML
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Per-unit price as a decimal string (e.g. "2.99")
    pub price: String,

    /// Per-unit discount as a decimal string (e.g. "0.50")
    pub discount: String,
}

impl ProductFixture {
    /// Convert into [`ProductInfo`] for the given id
    ///
    /// # Errors
    ///
    /// Returns an error if the price or discount is not an exact decimal.
    pub fn try_into_product(self, id: &str) -> Result<ProductInfo, FixtureError> {
        let price = parse_amount(&self.price).ok_or(FixtureError::InvalidPrice(self.price))?;

        let discount =
            parse_amount(&self.discount).ok_or(FixtureError::InvalidDiscount(self.discount))?;

        Ok(ProductInfo::new(id, self.name, price, discount))
    }
}

/// Parse a decimal amount without rounding, `None` if it is not representable.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    Decimal::from_str_exact(s.trim()).ok()
}
