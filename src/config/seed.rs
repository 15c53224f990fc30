//! Seed data loading from config.toml
//!
//! This module provides functionality to load sample ingredients and products
//! from a TOML configuration file. The records defined there populate a new
//! session on startup; nothing is ever written back.

use crate::{
    entities::{IngredientDraft, ProductDraft, Unit},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire seed file
#[derive(Debug, Default, Deserialize)]
pub struct SeedConfig {
    /// Ingredients to place in the ledger
    #[serde(default)]
    pub ingredients: Vec<IngredientSeed>,
    /// Products to place in the catalog
    #[serde(default)]
    pub products: Vec<ProductSeed>,
}

/// A seeded ingredient purchase
#[derive(Debug, Deserialize, Clone)]
pub struct IngredientSeed {
    /// Ingredient name
    pub name: String,
    /// Amount purchased
    pub quantity: f64,
    /// Purchase unit, e.g. `"kg"` or `"unidade"`
    pub unit: Unit,
    /// Price paid per unit
    pub unit_price: f64,
    /// Optional supplier
    #[serde(default)]
    pub supplier: Option<String>,
    /// `YYYY-MM-DD`; today when absent
    #[serde(default)]
    pub last_purchase_date: Option<NaiveDate>,
}

impl IngredientSeed {
    /// Converts the entry into a form draft for the ledger.
    #[must_use]
    pub fn to_draft(&self) -> IngredientDraft {
        IngredientDraft {
            name: self.name.clone(),
            quantity: self.quantity,
            unit: self.unit,
            unit_price: self.unit_price,
            supplier: self.supplier.clone(),
        }
    }
}

/// A seeded product
#[derive(Debug, Deserialize, Clone)]
pub struct ProductSeed {
    /// Product name
    pub name: String,
    /// Catalog grouping; "Geral" when absent
    #[serde(default)]
    pub category: String,
    /// Sellable units per batch
    pub yield_count: u32,
    /// Ingredient cost of one batch
    pub ingredient_cost: f64,
    /// Packaging cost of one batch
    #[serde(default)]
    pub packaging_cost: f64,
    /// Target markup in percent
    pub margin_percent: f64,
    /// Preparation time of one batch
    #[serde(default)]
    pub prep_time_minutes: u32,
}

impl ProductSeed {
    /// Converts the entry into a form draft for the catalog.
    #[must_use]
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            yield_count: self.yield_count,
            ingredient_cost: self.ingredient_cost,
            packaging_cost: self.packaging_cost,
            margin_percent: self.margin_percent,
            prep_time_minutes: self.prep_time_minutes,
        }
    }
}

/// Parses seed data from TOML text.
///
/// # Errors
/// Returns an error if the TOML syntax is invalid or required fields are missing.
pub fn parse_seed(contents: &str) -> Result<SeedConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed file: {e}"),
    })
}

/// Loads seed data from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load seed data from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read seed file {}: {e}", path_ref.display()),
    })?;
    parse_seed(&contents)
}

/// Like [`load_seed`], but a missing file yields an empty seed.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_seed_or_default<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let path_ref = path.as_ref();
    if !path_ref.exists() {
        tracing::warn!(
            "Seed file {} not found, starting with an empty session",
            path_ref.display()
        );
        return Ok(SeedConfig::default());
    }
    load_seed(path_ref)
}
