//! Product entity - A recipe product priced from its batch costs, yield and margin.
//!
//! Only the inputs are stored. Total cost, per-unit cost and sale prices are derived
//! through [`Product::costing`] on every call, so they can never go stale when an
//! input changes.

use crate::{
    core::costing::{Costing, validate_cost, validate_margin},
    errors::{Error, Result},
};
use std::num::NonZeroU32;

/// Margin the product form starts with.
pub const DEFAULT_MARGIN_PERCENT: f64 = 60.0;

/// Category a product is filed under when none is chosen.
pub const DEFAULT_CATEGORY: &str = "Geral";

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: u64,
    name: String,
    category: String,
    yield_count: NonZeroU32,
    ingredient_cost: f64,
    packaging_cost: f64,
    margin_percent: f64,
    prep_time_minutes: u32,
}

impl Product {
    /// Builds a product from a draft, rejecting it if any invariant fails.
    pub(crate) fn from_draft(id: u64, draft: ProductDraft) -> Result<Self> {
        let yield_count = draft.validate()?;
        Ok(Self {
            id,
            name: draft.name.trim().to_string(),
            category: match draft.category.trim() {
                "" => DEFAULT_CATEGORY.to_string(),
                category => category.to_string(),
            },
            yield_count,
            ingredient_cost: draft.ingredient_cost,
            packaging_cost: draft.packaging_cost,
            margin_percent: draft.margin_percent,
            prep_time_minutes: draft.prep_time_minutes,
        })
    }

    /// Catalog-assigned id, unique within the session.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Trimmed display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Catalog grouping, e.g. "Doces".
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Sellable units produced by one batch.
    #[must_use]
    pub const fn yield_count(&self) -> NonZeroU32 {
        self.yield_count
    }

    /// Ingredient cost of one batch.
    #[must_use]
    pub const fn ingredient_cost(&self) -> f64 {
        self.ingredient_cost
    }

    /// Packaging cost of one batch.
    #[must_use]
    pub const fn packaging_cost(&self) -> f64 {
        self.packaging_cost
    }

    /// Target markup over the per-unit cost, in percent.
    #[must_use]
    pub const fn margin_percent(&self) -> f64 {
        self.margin_percent
    }

    /// Preparation time of one batch.
    #[must_use]
    pub const fn prep_time_minutes(&self) -> u32 {
        self.prep_time_minutes
    }

    /// Derived pricing for the current inputs.
    #[must_use]
    pub fn costing(&self) -> Costing {
        Costing::for_batch(
            self.ingredient_cost,
            self.packaging_cost,
            self.yield_count,
            self.margin_percent,
        )
    }

    /// Sale price of the whole batch.
    #[must_use]
    pub fn batch_sell_price(&self) -> f64 {
        self.costing().batch_sell_price(self.yield_count)
    }

    /// Replaces the target margin.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] if the margin is NaN or infinite.
    pub(crate) fn set_margin_percent(&mut self, margin_percent: f64) -> Result<()> {
        validate_margin(margin_percent)?;
        self.margin_percent = margin_percent;
        Ok(())
    }
}

/// Product form contents before submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    /// Name as typed; trimmed on submission
    pub name: String,
    /// Catalog grouping
    pub category: String,
    /// Sellable units per batch, must be at least 1
    pub yield_count: u32,
    /// Ingredient cost of one batch
    pub ingredient_cost: f64,
    /// Packaging cost of one batch
    pub packaging_cost: f64,
    /// Target markup in percent
    pub margin_percent: f64,
    /// Preparation time of one batch
    pub prep_time_minutes: u32,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            yield_count: 1,
            ingredient_cost: 0.0,
            packaging_cost: 0.0,
            margin_percent: DEFAULT_MARGIN_PERCENT,
            prep_time_minutes: 0,
        }
    }
}

impl ProductDraft {
    /// Draft with no packaging cost in the default category.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        yield_count: u32,
        ingredient_cost: f64,
        margin_percent: f64,
    ) -> Self {
        Self {
            name: name.into(),
            yield_count,
            ingredient_cost,
            margin_percent,
            ..Self::default()
        }
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the packaging cost of one batch.
    #[must_use]
    pub const fn with_packaging_cost(mut self, packaging_cost: f64) -> Self {
        self.packaging_cost = packaging_cost;
        self
    }

    /// Checks the draft and returns its yield as a non-zero count.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] for an empty name, a zero yield, a negative or
    /// non-finite cost, or a non-finite margin.
    pub fn validate(&self) -> Result<NonZeroU32> {
        if self.name.trim().is_empty() {
            return Err(Error::validation("Product name cannot be empty"));
        }

        let yield_count = NonZeroU32::new(self.yield_count)
            .ok_or_else(|| Error::validation("Yield must be at least 1 unit"))?;

        validate_cost("ingredient cost", self.ingredient_cost)?;
        validate_cost("packaging cost", self.packaging_cost)?;
        validate_margin(self.margin_percent)?;

        Ok(yield_count)
    }
}
