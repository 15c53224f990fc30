//! Ingredient ledger business logic - Handles all ingredient-related operations.
//!
//! The ledger owns the purchased ingredients of a session. Ingredients are appended
//! with a fresh id and removed by id; aggregates are recomputed from the current
//! records on every call.

use crate::{
    entities::{Ingredient, IngredientDraft},
    errors::{Error, Result},
};
use chrono::{Local, NaiveDate};

/// In-memory collection of purchased ingredients.
#[derive(Debug, Clone, Default)]
pub struct IngredientLedger {
    items: Vec<Ingredient>,
    next_id: u64,
}

impl IngredientLedger {
    /// Empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an ingredient bought today.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] if the name is empty or the unit price or
    /// quantity is not greater than zero. The ledger is unchanged on error.
    pub fn add_ingredient(&mut self, draft: IngredientDraft) -> Result<&Ingredient> {
        self.add_ingredient_dated(draft, Local::now().date_naive())
    }

    /// Adds an ingredient with an explicit purchase date.
    ///
    /// # Errors
    /// Same as [`IngredientLedger::add_ingredient`].
    pub fn add_ingredient_dated(
        &mut self,
        draft: IngredientDraft,
        date: NaiveDate,
    ) -> Result<&Ingredient> {
        draft.validate()?;

        self.next_id += 1;
        let index = self.items.len();
        self.items
            .push(Ingredient::from_draft(self.next_id, draft, date));
        Ok(&self.items[index])
    }

    /// Removes an ingredient and hands it back.
    ///
    /// # Errors
    /// Returns [`Error::IngredientNotFound`] if no ingredient has this id.
    pub fn remove_ingredient(&mut self, id: u64) -> Result<Ingredient> {
        let position = self
            .items
            .iter()
            .position(|ingredient| ingredient.id() == id)
            .ok_or(Error::IngredientNotFound { id })?;
        Ok(self.items.remove(position))
    }

    /// Looks an ingredient up by id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Ingredient> {
        self.items.iter().find(|ingredient| ingredient.id() == id)
    }

    /// Ingredients in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.items.iter()
    }

    /// Ingredients whose name contains `query`, ignoring case.
    ///
    /// A blank query matches everything.
    pub fn search(&self, query: &str) -> impl Iterator<Item = &Ingredient> {
        let needle = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(move |ingredient| ingredient.name().to_lowercase().contains(&needle))
    }

    /// Ingredients as a slice, for the free aggregate functions.
    #[must_use]
    pub fn as_slice(&self) -> &[Ingredient] {
        &self.items
    }

    /// Number of ingredients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the ledger holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Value of all stock on hand.
    #[must_use]
    pub fn total_stock_value(&self) -> f64 {
        total_stock_value(&self.items)
    }

    /// Mean unit price, `0.0` for an empty ledger.
    #[must_use]
    pub fn average_unit_price(&self) -> f64 {
        average_unit_price(&self.items)
    }
}

/// Sum of `quantity * unit_price` over `ingredients`.
#[must_use]
pub fn total_stock_value(ingredients: &[Ingredient]) -> f64 {
    ingredients.iter().map(Ingredient::stock_value).sum()
}

/// Mean of the unit prices, defined as `0.0` when there are no ingredients.
#[must_use]
pub fn average_unit_price(ingredients: &[Ingredient]) -> f64 {
    if ingredients.is_empty() {
        return 0.0;
    }

    let sum: f64 = ingredients.iter().map(Ingredient::unit_price).sum();
    // Cast safety: ledgers hold a handful of records, far below f64's exact integer range.
    #[allow(clippy::cast_precision_loss)]
    let count = ingredients.len() as f64;
    sum / count
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::{entities::Unit, test_utils::*};
    use proptest::prelude::*;

    #[test]
    fn test_add_ingredient_assigns_fresh_ids_and_today() {
        let mut ledger = IngredientLedger::new();
        let first = ledger.add_ingredient(flour_draft()).unwrap().id();
        let second = ledger.add_ingredient(eggs_draft()).unwrap().id();

        assert_ne!(first, second);
        assert_eq!(ledger.len(), 2);
        assert_eq!(
            ledger.get(first).unwrap().last_purchase_date(),
            Local::now().date_naive()
        );
    }

    #[test]
    fn test_add_ingredient_validation_leaves_ledger_unchanged() {
        let mut ledger = sample_ledger();
        let before = ledger.len();

        let result = ledger.add_ingredient(IngredientDraft::new("", 1.0, Unit::Kg, 3.0));
        assert!(matches!(result, Err(Error::Validation { .. })));

        let result = ledger.add_ingredient(IngredientDraft::new("Fermento", 1.0, Unit::G, 0.0));
        assert!(matches!(result, Err(Error::Validation { .. })));

        assert_eq!(ledger.len(), before);
    }

    #[test]
    fn test_remove_ingredient() {
        let mut ledger = sample_ledger();
        let id = ledger.iter().next().unwrap().id();

        let removed = ledger.remove_ingredient(id).unwrap();
        assert_eq!(removed.name(), "Farinha de Trigo");
        assert!(ledger.get(id).is_none());
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_remove_missing_ingredient() {
        let mut ledger = sample_ledger();
        let result = ledger.remove_ingredient(999);
        assert!(matches!(result, Err(Error::IngredientNotFound { id: 999 })));
        assert_eq!(ledger.len(), 4);
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut ledger = IngredientLedger::new();
        let id = ledger.add_ingredient(flour_draft()).unwrap().id();
        ledger.remove_ingredient(id).unwrap();
        let next = ledger.add_ingredient(flour_draft()).unwrap().id();
        assert_ne!(id, next);
    }

    #[test]
    fn test_search_blank_query_returns_everything() {
        let ledger = sample_ledger();
        assert_eq!(ledger.search("").count(), 4);
        assert_eq!(ledger.search("   ").count(), 4);
    }

    #[test]
    fn test_search_ignores_case() {
        let ledger = sample_ledger();
        let names: Vec<&str> = ledger.search("FARINHA").map(Ingredient::name).collect();
        assert_eq!(names, ["Farinha de Trigo"]);

        let names: Vec<&str> = ledger.search(" açúcar ").map(Ingredient::name).collect();
        assert_eq!(names, ["Açúcar Cristal"]);

        // substring, not prefix
        assert_eq!(ledger.search("integral").count(), 1);
    }

    #[test]
    fn test_search_without_match() {
        let ledger = sample_ledger();
        assert_eq!(ledger.search("chocolate").count(), 0);
    }

    #[test]
    fn test_sample_ledger_aggregates() {
        // 5*5.00 + 2*4.50 + 30*0.60 + 3*6.00 = 25 + 9 + 18 + 18
        let ledger = sample_ledger();
        assert_close(ledger.total_stock_value(), 70.0);
        // (5.00 + 4.50 + 0.60 + 6.00) / 4
        assert_close(ledger.average_unit_price(), 4.025);
    }

    #[test]
    fn test_aggregates_track_mutations() {
        let mut ledger = sample_ledger();
        let id = ledger
            .add_ingredient(IngredientDraft::new("Chocolate", 2.0, Unit::Kg, 40.0))
            .unwrap()
            .id();
        assert_close(ledger.total_stock_value(), 150.0);

        ledger.remove_ingredient(id).unwrap();
        assert_close(ledger.total_stock_value(), 70.0);
    }

    #[test]
    fn test_empty_ledger_aggregates_are_zero() {
        let ledger = IngredientLedger::new();
        assert_eq!(ledger.total_stock_value(), 0.0);
        assert_eq!(ledger.average_unit_price(), 0.0);
        assert!(!average_unit_price(&[]).is_nan());
    }

    proptest! {
        #[test]
        fn add_then_remove_restores_total(
            quantity in 0.1f64..1_000.0,
            unit_price in 0.01f64..1_000.0,
        ) {
            let mut ledger = sample_ledger();
            let before_total = ledger.total_stock_value();
            let before_ids: Vec<u64> = ledger.iter().map(Ingredient::id).collect();

            let id = ledger
                .add_ingredient(IngredientDraft::new("Cacau", quantity, Unit::Kg, unit_price))
                .unwrap()
                .id();
            ledger.remove_ingredient(id).unwrap();

            let after_ids: Vec<u64> = ledger.iter().map(Ingredient::id).collect();
            prop_assert_eq!(before_ids, after_ids);
            prop_assert_eq!(before_total.to_bits(), ledger.total_stock_value().to_bits());
        }
    }
}
