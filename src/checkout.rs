//! Checkout

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::{
    amounts::{exact_add, exact_mul},
    basket::Basket,
    catalog::{CatalogError, ProductCatalog},
    summary::BasketSummary,
};

/// Errors that can occur while summarising a basket.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// A basket line's product id is not in the catalog.
    #[error("Product not found in inventory: {0}")]
    ProductNotFound(String),

    /// Decimal arithmetic overflowed or would have rounded while pricing the
    /// line for this product id.
    #[error("Amount overflowed while pricing product: {0}")]
    Overflow(String),

    /// Price minus discount left the decimal range or would have rounded.
    #[error("Basket total overflowed")]
    TotalOverflow,
}

impl From<CatalogError> for CheckoutError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::ProductNotFound(id) => Self::ProductNotFound(id),
        }
    }
}

/// Prices baskets against an injected product catalog.
#[derive(Debug, Clone)]
pub struct CheckoutCalculator<C> {
    catalog: C,
}

impl<C: ProductCatalog> CheckoutCalculator<C> {
    /// Create a calculator that resolves products through `catalog`.
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// The catalog products are resolved through.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Summarise the basket's current contents.
    ///
    /// Lines are priced in product id order, with one catalog lookup per
    /// distinct product. Amounts are exact decimals and are never clamped, so
    /// a negative price, discount or total is a valid result.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::ProductNotFound`]: the first product id, in id order, that
    ///   the catalog cannot resolve. Nothing is returned for the lines before it.
    /// - [`CheckoutError::Overflow`]: a line or running total could not be held
    ///   exactly, either out of range or needing more than 28 significant digits.
    /// - [`CheckoutError::TotalOverflow`]: price minus discount could not be held exactly.
    #[tracing::instrument(
        name = "checkout.summarize",
        skip_all,
        fields(lines = basket.len()),
        err(level = "warn")
    )]
    pub fn summarize(&self, basket: &Basket) -> Result<BasketSummary, CheckoutError> {
        let mut descriptions = Vec::with_capacity(basket.len());
        let mut price = Decimal::ZERO;
        let mut discount = Decimal::ZERO;

        for (id, quantity) in basket.iter() {
            let product = self.catalog.lookup(id)?;
            let overflow = || CheckoutError::Overflow(id.to_string());

            let item_cost = exact_mul(product.price(), quantity).ok_or_else(overflow)?;
            let item_discount = exact_mul(product.discount(), quantity).ok_or_else(overflow)?;

            debug!(
                product_id = id,
                quantity,
                %item_cost,
                %item_discount,
                "priced basket line"
            );

            descriptions.push(format!("{}({quantity})", product.name()));

            price = exact_add(price, item_cost).ok_or_else(overflow)?;
            discount = exact_add(discount, item_discount).ok_or_else(overflow)?;
        }

        let summary = BasketSummary::new(descriptions.join(", "), price, discount)
            .ok_or(CheckoutError::TotalOverflow)?;

        debug!(
            price = %summary.price(),
            discount = %summary.discount(),
            total = %summary.total(),
            "summarised basket"
        );

        Ok(summary)
    }
}

/// Summarise a basket against a borrowed catalog.
///
/// # Errors
///
/// See [`CheckoutCalculator::summarize`].
pub fn summarize<C: ProductCatalog + ?Sized>(
    basket: &Basket,
    catalog: &C,
) -> Result<BasketSummary, CheckoutError> {
    CheckoutCalculator::new(catalog).summarize(basket)
}
