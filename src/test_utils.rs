//! Shared test utilities for Precifica.
//!
//! This module provides builders for the sample ingredients and products used
//! across the unit tests, plus a float comparison helper.

use crate::{
    core::{costing::implied_margin_percent, ingredient::IngredientLedger, product::ProductCatalog},
    entities::{IngredientDraft, ProductDraft, Unit},
};
use chrono::NaiveDate;

/// Asserts two amounts are equal up to floating-point noise.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub fn flour_draft() -> IngredientDraft {
    IngredientDraft::new("Farinha de Trigo", 5.0, Unit::Kg, 5.00).with_supplier("Padaria Central")
}

pub fn eggs_draft() -> IngredientDraft {
    IngredientDraft::new("Ovos", 30.0, Unit::Unidade, 0.60)
}

/// A ledger with the four sample purchases.
///
/// Ids are assigned 1 through 4 in this order: flour, sugar, eggs, milk.
pub fn sample_ledger() -> IngredientLedger {
    let jan_15 = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default();
    let jan_14 = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap_or_default();

    let mut ledger = IngredientLedger::new();
    for (draft, date) in [
        (flour_draft(), jan_15),
        (IngredientDraft::new("Açúcar Cristal", 2.0, Unit::Kg, 4.50), jan_15),
        (eggs_draft(), jan_14),
        (IngredientDraft::new("Leite Integral", 3.0, Unit::Litro, 6.00), jan_14),
    ] {
        ledger
            .add_ingredient_dated(draft, date)
            .unwrap_or_else(|e| panic!("sample ingredient rejected: {e}"));
    }
    ledger
}

pub fn brigadeiro_draft() -> ProductDraft {
    ProductDraft::new("Brigadeiro Gourmet", 50, 15.00, 75.0).with_category("Doces")
}

/// Batch cost 28, yields 12, priced so the batch sells for 48.
pub fn bolo_de_cenoura_draft() -> ProductDraft {
    let margin = implied_margin_percent(28.0, 48.0).unwrap_or_default();
    ProductDraft::new("Bolo de Cenoura", 12, 28.00, margin).with_category("Bolos")
}

pub fn torta_de_limao_draft() -> ProductDraft {
    ProductDraft::new("Torta de Limão", 8, 22.00, 62.0).with_category("Tortas")
}

/// A catalog with the three sample products, ids 1 through 3.
pub fn sample_catalog() -> ProductCatalog {
    let mut catalog = ProductCatalog::new();
    for draft in [
        brigadeiro_draft(),
        bolo_de_cenoura_draft(),
        torta_de_limao_draft(),
    ] {
        catalog
            .add_product(draft)
            .unwrap_or_else(|e| panic!("sample product rejected: {e}"));
    }
    catalog
}
