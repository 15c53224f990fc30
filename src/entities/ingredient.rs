//! Ingredient entity - A purchased raw ingredient and the form draft that creates it.
//!
//! Ingredients are only built from a validated [`IngredientDraft`], so every stored
//! record has a non-empty name, a positive quantity and a positive unit price.
//! Records are never edited in place; the ledger adds and removes whole records.

use crate::{
    core::extraction::ExtractedFields,
    entities::Unit,
    errors::{Error, Result},
};
use chrono::NaiveDate;

/// Smallest quantity the form stepper allows.
pub const MIN_DRAFT_QUANTITY: f64 = 0.1;

/// A purchased ingredient held in the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    id: u64,
    name: String,
    quantity: f64,
    unit: Unit,
    unit_price: f64,
    supplier: Option<String>,
    last_purchase_date: NaiveDate,
}

impl Ingredient {
    /// Builds a record from a draft that already passed [`IngredientDraft::validate`].
    pub(crate) fn from_draft(id: u64, draft: IngredientDraft, date: NaiveDate) -> Self {
        Self {
            id,
            name: draft.name.trim().to_string(),
            quantity: draft.quantity,
            unit: draft.unit,
            unit_price: draft.unit_price,
            supplier: draft
                .supplier
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            last_purchase_date: date,
        }
    }

    /// Ledger-assigned id, unique within the session.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Trimmed display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Amount purchased, in [`Ingredient::unit`].
    #[must_use]
    pub const fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Unit the quantity and unit price refer to.
    #[must_use]
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// Price paid per single `unit`.
    #[must_use]
    pub const fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// Where it was bought, if recorded.
    #[must_use]
    pub fn supplier(&self) -> Option<&str> {
        self.supplier.as_deref()
    }

    /// Date of the purchase.
    #[must_use]
    pub const fn last_purchase_date(&self) -> NaiveDate {
        self.last_purchase_date
    }

    /// Value of the stock on hand: `quantity * unit_price`.
    #[must_use]
    pub fn stock_value(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// Ingredient form contents before submission.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientDraft {
    /// Name as typed; trimmed on submission
    pub name: String,
    /// Amount purchased
    pub quantity: f64,
    /// Purchase unit
    pub unit: Unit,
    /// Price paid per unit
    pub unit_price: f64,
    /// Optional supplier; blank is treated as none
    pub supplier: Option<String>,
}

impl Default for IngredientDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: 1.0,
            unit: Unit::Kg,
            unit_price: 0.0,
            supplier: None,
        }
    }
}

impl IngredientDraft {
    /// Draft without a supplier.
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: f64, unit: Unit, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit,
            unit_price,
            supplier: None,
        }
    }

    /// Sets the supplier.
    #[must_use]
    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = Some(supplier.into());
        self
    }

    /// Checks the business rules a submitted ingredient must satisfy.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] if:
    /// - The name is empty or whitespace-only
    /// - The unit price is not a finite value greater than zero
    /// - The quantity is not a finite value greater than zero
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::validation("Ingredient name cannot be empty"));
        }

        if !self.unit_price.is_finite() || self.unit_price <= 0.0 {
            return Err(Error::validation(format!(
                "Unit price must be greater than zero, got {}",
                self.unit_price
            )));
        }

        if !self.quantity.is_finite() || self.quantity <= 0.0 {
            return Err(Error::validation(format!(
                "Quantity must be greater than zero, got {}",
                self.quantity
            )));
        }

        Ok(())
    }

    /// Steps the quantity by `delta`, never going below [`MIN_DRAFT_QUANTITY`].
    pub fn adjust_quantity(&mut self, delta: f64) {
        self.quantity = (self.quantity + delta).max(MIN_DRAFT_QUANTITY);
    }

    /// Prefills the draft from extracted fields.
    ///
    /// Absent fields reset to the blank-form defaults rather than keeping
    /// whatever was typed before; the supplier is left untouched.
    pub fn apply_extracted(&mut self, fields: &ExtractedFields) {
        let defaults = Self::default();
        self.name = fields.name.clone().unwrap_or(defaults.name);
        self.unit_price = fields.price.unwrap_or(defaults.unit_price);
        self.quantity = fields.quantity.unwrap_or(defaults.quantity);
        self.unit = fields.unit.unwrap_or(defaults.unit);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_validate_rejects_bad_drafts() {
        let blank = IngredientDraft::new("   ", 1.0, Unit::Kg, 5.0);
        assert!(matches!(blank.validate(), Err(Error::Validation { .. })));

        let free = IngredientDraft::new("Sal", 1.0, Unit::Kg, 0.0);
        assert!(matches!(free.validate(), Err(Error::Validation { .. })));

        let negative = IngredientDraft::new("Sal", 1.0, Unit::Kg, -2.0);
        assert!(matches!(negative.validate(), Err(Error::Validation { .. })));

        let nan = IngredientDraft::new("Sal", 1.0, Unit::Kg, f64::NAN);
        assert!(matches!(nan.validate(), Err(Error::Validation { .. })));

        let no_quantity = IngredientDraft::new("Sal", 0.0, Unit::Kg, 2.0);
        assert!(matches!(no_quantity.validate(), Err(Error::Validation { .. })));
    }

    #[test]
    fn test_validate_accepts_valid_draft() {
        let draft = IngredientDraft::new("Farinha de Trigo", 5.0, Unit::Kg, 5.0);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_from_draft_trims_name_and_empty_supplier() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let draft = IngredientDraft::new("  Ovos ", 30.0, Unit::Unidade, 0.6).with_supplier("  ");
        let ingredient = Ingredient::from_draft(7, draft, date);

        assert_eq!(ingredient.id(), 7);
        assert_eq!(ingredient.name(), "Ovos");
        assert_eq!(ingredient.supplier(), None);
        assert_eq!(ingredient.last_purchase_date(), date);
    }

    #[test]
    fn test_stock_value() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();
        let draft = IngredientDraft::new("Leite Integral", 3.0, Unit::Litro, 6.0);
        let ingredient = Ingredient::from_draft(1, draft, date);
        assert_eq!(ingredient.stock_value(), 18.0);
    }

    #[test]
    fn test_adjust_quantity_clamps_at_minimum() {
        let mut draft = IngredientDraft::default();
        draft.adjust_quantity(1.0);
        assert_eq!(draft.quantity, 2.0);

        draft.adjust_quantity(-5.0);
        assert_eq!(draft.quantity, MIN_DRAFT_QUANTITY);
    }

    #[test]
    fn test_apply_extracted_falls_back_to_defaults() {
        let mut draft = IngredientDraft::new("Antigo", 4.0, Unit::Ml, 3.0).with_supplier("Mercado");
        let fields = ExtractedFields {
            name: Some("Farinha de Trigo Especial".to_string()),
            price: Some(8.5),
            quantity: None,
            unit: None,
        };

        draft.apply_extracted(&fields);

        assert_eq!(draft.name, "Farinha de Trigo Especial");
        assert_eq!(draft.unit_price, 8.5);
        assert_eq!(draft.quantity, 1.0);
        assert_eq!(draft.unit, Unit::Kg);
        assert_eq!(draft.supplier.as_deref(), Some("Mercado"));
    }
}
