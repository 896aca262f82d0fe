//! Checkout prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::Basket,
    catalog::{CatalogError, InMemoryCatalog, ProductCatalog},
    checkout::{CheckoutCalculator, CheckoutError, summarize},
    fixtures::{Fixture, FixtureError},
    products::ProductInfo,
    summary::BasketSummary,
};
