//! Catalog

use std::collections::HashMap;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::products::ProductInfo;

/// Errors raised when resolving products.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The id is not present in the catalog.
    #[error("Product not found in inventory: {0}")]
    ProductNotFound(String),
}

/// Resolves product ids to their pricing information.
///
/// Implementations backed by I/O own their latency and failure handling; the
/// only failure visible to callers is an unresolvable id.
#[cfg_attr(test, mockall::automock)]
pub trait ProductCatalog {
    /// Look up a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ProductNotFound`] if the id does not resolve.
    fn lookup(&self, id: &str) -> Result<ProductInfo, CatalogError>;
}

impl<C: ProductCatalog + ?Sized> ProductCatalog for &C {
    fn lookup(&self, id: &str) -> Result<ProductInfo, CatalogError> {
        (**self).lookup(id)
    }
}

/// Read-only catalog over a fixed in-memory map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: FxHashMap<String, ProductInfo>,
}

impl InMemoryCatalog {
    /// Create a catalog from an id to product mapping.
    pub fn new<S>(products: HashMap<String, ProductInfo, S>) -> Self {
        Self {
            products: products.into_iter().collect(),
        }
    }

    /// Create a catalog keyed by each product's own id.
    ///
    /// Later products replace earlier ones with the same id.
    pub fn from_products(products: impl IntoIterator<Item = ProductInfo>) -> Self {
        Self {
            products: products
                .into_iter()
                .map(|product| (product.id().to_string(), product))
                .collect(),
        }
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Check if the id resolves.
    pub fn contains(&self, id: &str) -> bool {
        self.products.contains_key(id)
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn lookup(&self, id: &str) -> Result<ProductInfo, CatalogError> {
        self.products
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }
}

impl FromIterator<ProductInfo> for InMemoryCatalog {
    fn from_iter<I: IntoIterator<Item = ProductInfo>>(iter: I) -> Self {
        Self::from_products(iter)
    }
}
