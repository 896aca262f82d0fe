//! Basket

use std::collections::BTreeMap;

/// Product ids and their quantities.
///
/// Entries are kept ordered by ascending product id so that anything derived
/// from the basket (such as a checkout description) is reproducible. Every
/// stored quantity is at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Basket {
    items: BTreeMap<String, u64>,
}

impl Basket {
    /// Create an empty basket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// The id is not checked against any catalog; unknown ids surface at checkout.
    pub fn add(&mut self, id: impl Into<String>) {
        let quantity = self.items.entry(id.into()).or_insert(0);

        *quantity = quantity.saturating_add(1);
    }

    /// Remove one unit of a product.
    ///
    /// Removing the last unit drops the entry. Removing an id that is not in
    /// the basket does nothing.
    pub fn remove(&mut self, id: &str) {
        let Some(quantity) = self.items.get_mut(id) else {
            return;
        };

        if *quantity > 1 {
            *quantity -= 1;
        } else {
            self.items.remove(id);
        }
    }

    /// Snapshot of `(id, quantity)` pairs, ordered by id.
    pub fn items(&self) -> Vec<(String, u64)> {
        self.iter()
            .map(|(id, quantity)| (id.to_string(), quantity))
            .collect()
    }

    /// Iterate `(id, quantity)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.items
            .iter()
            .map(|(id, quantity)| (id.as_str(), *quantity))
    }

    /// Quantity held for an id, zero when absent.
    pub fn quantity(&self, id: &str) -> u64 {
        self.items.get(id).copied().unwrap_or(0)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> u64 {
        self.items
            .values()
            .fold(0, |acc, quantity| acc.saturating_add(*quantity))
    }
}

impl<S: Into<String>> Extend<S> for Basket {
    fn extend<I: IntoIterator<Item = S>>(&mut self, ids: I) {
        for id in ids {
            self.add(id);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Basket {
    fn from_iter<I: IntoIterator<Item = S>>(ids: I) -> Self {
        let mut basket = Basket::new();
        basket.extend(ids);
        basket
    }
}
