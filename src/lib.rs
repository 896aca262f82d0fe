//! Checkout
//!
//! Prices shopping baskets against a product catalog, producing a description
//! of the basket lines with exact decimal price, discount and total.

pub mod amounts;
pub mod basket;
pub mod catalog;
pub mod checkout;
pub mod fixtures;
pub mod prelude;
pub mod products;
pub mod summary;
