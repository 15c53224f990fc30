//! Parsing of free-text cost labels typed during onboarding.
//!
//! Labels look like `R$ 5,50 por 1kg`, `12 / 2 litros` or just `R$ 1.234,56`.
//! The price uses Brazilian formatting: when a comma is present it is the decimal
//! separator and dots are thousands separators. The package part after `por` or
//! `/` is optional and defaults to one kilogram.

use crate::{
    entities::{IngredientDraft, Unit},
    errors::{Error, Result},
};

/// A parsed cost label: `price` paid for `quantity` of `unit`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostLabel {
    /// Price of the whole package
    pub price: f64,
    /// Package size
    pub quantity: f64,
    /// Unit of the package size
    pub unit: Unit,
}

impl CostLabel {
    /// Price of a single unit of the package.
    #[must_use]
    pub fn unit_price(&self) -> f64 {
        self.price / self.quantity
    }

    /// Ingredient draft for a package bought at this label.
    #[must_use]
    pub fn into_draft(self, name: impl Into<String>) -> IngredientDraft {
        IngredientDraft::new(name, self.quantity, self.unit, self.unit_price())
    }
}

/// Parses a cost label.
///
/// # Errors
/// Returns [`Error::Validation`] when the price or package quantity is missing,
/// unparsable or not greater than zero, or when the unit is unknown.
pub fn parse_cost_label(label: &str) -> Result<CostLabel> {
    let normalized = label.trim().to_lowercase();
    let (price_part, package_part) = split_package(&normalized);

    let price = parse_amount(strip_currency(price_part))?;
    if price <= 0.0 {
        return Err(Error::validation(format!(
            "Price must be greater than zero in {label:?}"
        )));
    }

    let (quantity, unit) = match package_part {
        Some(package) => parse_package(package)?,
        None => (1.0, Unit::default()),
    };

    Ok(CostLabel {
        price,
        quantity,
        unit,
    })
}

fn split_package(label: &str) -> (&str, Option<&str>) {
    if let Some((price, package)) = label.split_once(" por ") {
        return (price, Some(package));
    }
    if let Some((price, package)) = label.split_once('/') {
        return (price, Some(package));
    }
    (label, None)
}

fn strip_currency(part: &str) -> &str {
    let part = part.trim();
    let part = part.strip_prefix("r$").unwrap_or(part);
    let part = part.strip_suffix("reais").unwrap_or(part);
    part.trim()
}

fn parse_amount(raw: &str) -> Result<f64> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(Error::validation("Missing amount in cost label"));
    }

    let canonical = if compact.contains(',') {
        compact.replace('.', "").replace(',', ".")
    } else {
        compact
    };

    let value: f64 = canonical
        .parse()
        .map_err(|_| Error::validation(format!("Could not read amount {raw:?}")))?;

    if !value.is_finite() {
        return Err(Error::validation(format!("Amount {raw:?} is not a number")));
    }
    Ok(value)
}

fn parse_package(package: &str) -> Result<(f64, Unit)> {
    let package = package.trim();
    let split = package
        .find(|c: char| !(c.is_ascii_digit() || c == ',' || c == '.'))
        .unwrap_or(package.len());
    let (number, unit) = package.split_at(split);

    let quantity = if number.trim().is_empty() {
        1.0
    } else {
        parse_amount(number)?
    };
    if quantity <= 0.0 {
        return Err(Error::validation(format!(
            "Package quantity must be greater than zero in {package:?}"
        )));
    }

    let unit = match unit.trim() {
        "" => Unit::default(),
        other => other.parse()?,
    };

    Ok((quantity, unit))
}
