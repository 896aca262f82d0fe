//! Basket Fixtures

use serde::Deserialize;

/// Basket contents in YAML
#[derive(Debug, Deserialize)]
pub struct BasketFixture {
    /// Product ids, one entry per unit added
    pub items: Vec<String>,
}
