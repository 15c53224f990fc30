//! Product catalog business logic - Handles all product-related operations.
//!
//! The catalog only validates and stores products. Quota checks live in the
//! session, which consults [`crate::core::quota`] before calling
//! [`ProductCatalog::add_product`].

use crate::{
    entities::{Product, ProductDraft},
    errors::{Error, Result},
};

/// In-memory collection of products.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    items: Vec<Product>,
    next_id: u64,
}

impl ProductCatalog {
    /// Empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores a new product.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] if the draft breaks a product invariant.
    pub fn add_product(&mut self, draft: ProductDraft) -> Result<&Product> {
        let product = Product::from_draft(self.next_id + 1, draft)?;
        self.next_id += 1;

        let index = self.items.len();
        self.items.push(product);
        Ok(&self.items[index])
    }

    /// Removes a product and hands it back.
    ///
    /// # Errors
    /// Returns [`Error::ProductNotFound`] if no product has this id.
    pub fn remove_product(&mut self, id: u64) -> Result<Product> {
        let position = self
            .items
            .iter()
            .position(|product| product.id() == id)
            .ok_or(Error::ProductNotFound { id })?;
        Ok(self.items.remove(position))
    }

    /// Sets a new target margin; derived prices follow automatically.
    ///
    /// # Errors
    /// Returns [`Error::ProductNotFound`] for an unknown id and
    /// [`Error::Validation`] for a non-finite margin.
    pub fn reprice_product(&mut self, id: u64, margin_percent: f64) -> Result<&Product> {
        let product = self
            .items
            .iter_mut()
            .find(|product| product.id() == id)
            .ok_or(Error::ProductNotFound { id })?;
        product.set_margin_percent(margin_percent)?;
        Ok(product)
    }

    /// Looks a product up by id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Product> {
        self.items.iter().find(|product| product.id() == id)
    }

    /// Products in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.items.iter()
    }

    /// Number of products, as counted by the quota.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
