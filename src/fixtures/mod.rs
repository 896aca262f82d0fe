//! Fixtures
//!
//! Catalogs and baskets described in YAML, for tests and demos.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::info;

use crate::{
    basket::Basket,
    catalog::InMemoryCatalog,
    fixtures::{baskets::BasketFixture, products::ProductsFixture},
    products::ProductInfo,
};

pub mod baskets;
pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid discount format
    #[error("Invalid discount format: {0}")]
    InvalidDiscount(String),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Product id -> product info
    products: FxHashMap<String, ProductInfo>,

    /// Basket built from the loaded basket fixture
    basket: Basket,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            products: FxHashMap::default(),
            basket: Basket::new(),
        }
    }

    /// Load products from `products/<name>.yml`
    ///
    /// Null entries are skipped, so their ids never resolve.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if an amount is not a decimal.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ProductsFixture = serde_norway::from_str(&contents)?;

        let mut loaded = 0;

        for (id, product_fixture) in fixture.products {
            let Some(product_fixture) = product_fixture else {
                continue;
            };

            let product = product_fixture.try_into_product(&id)?;

            self.products.insert(id, product);
            loaded += 1;
        }

        info!(path = %file_path.display(), loaded, "loaded product fixtures");

        Ok(self)
    }

    /// Load basket contents from `baskets/<name>.yml`, adding each listed id in order
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_basket(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("baskets").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: BasketFixture = serde_norway::from_str(&contents)?;

        let added = fixture.items.len();

        self.basket.extend(fixture.items);

        info!(path = %file_path.display(), added, "loaded basket fixture");

        Ok(self)
    }

    /// Load a complete fixture set (products and basket with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_products(name)?.load_basket(name)?;

        Ok(fixture)
    }

    /// Build a catalog from the loaded products
    pub fn catalog(&self) -> InMemoryCatalog {
        InMemoryCatalog::from_products(self.products.values().cloned())
    }

    /// Get the basket built from the loaded basket fixture
    pub fn basket(&self) -> &Basket {
        &self.basket
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
