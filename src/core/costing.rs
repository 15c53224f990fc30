//! Product costing business logic.
//!
//! Turns the batch inputs of a recipe (what was spent on ingredients and packaging,
//! how many units it yields, and the desired margin) into per-unit cost and a
//! suggested per-unit sale price. Every function here is pure: the same inputs always
//! produce bit-identical outputs, so callers simply recompute on each input change.

use crate::errors::{Error, Result};
use std::{num::NonZeroU32, ops::RangeInclusive};

/// Margin band the product form recommends for handmade goods.
pub const RECOMMENDED_MARGIN: RangeInclusive<f64> = 60.0..=80.0;

/// Derived pricing for one batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Costing {
    /// Ingredient cost plus packaging cost
    pub total_cost: f64,
    /// Total cost divided by the yield
    pub cost_per_unit: f64,
    /// Per-unit cost marked up by the margin
    pub sell_price_per_unit: f64,
}

impl Costing {
    /// Computes pricing for inputs that are already known to be valid.
    ///
    /// The non-zero yield makes the division total; cost and margin validation is
    /// left to [`compute_costing`] and the entity constructors.
    #[must_use]
    pub fn for_batch(
        ingredient_cost: f64,
        packaging_cost: f64,
        yield_count: NonZeroU32,
        margin_percent: f64,
    ) -> Self {
        let total_cost = ingredient_cost + packaging_cost;
        let cost_per_unit = total_cost / f64::from(yield_count.get());
        let sell_price_per_unit = cost_per_unit * (1.0 + margin_percent / 100.0);

        Self {
            total_cost,
            cost_per_unit,
            sell_price_per_unit,
        }
    }

    /// Sale price of a whole batch of `yield_count` units.
    #[must_use]
    pub fn batch_sell_price(&self, yield_count: NonZeroU32) -> f64 {
        self.sell_price_per_unit * f64::from(yield_count.get())
    }

    /// Profit on each unit sold. Negative when the margin is negative.
    #[must_use]
    pub fn profit_per_unit(&self) -> f64 {
        self.sell_price_per_unit - self.cost_per_unit
    }
}

/// Computes per-unit cost and sale price from raw form values.
///
/// Negative margins are accepted as-is and produce a sale price below cost.
///
/// # Errors
/// Returns an error if:
/// - `yield_count` is zero ([`Error::DivisionByZero`])
/// - either cost is negative or not finite ([`Error::Validation`])
/// - the margin is NaN or infinite ([`Error::Validation`])
pub fn compute_costing(
    ingredient_cost: f64,
    packaging_cost: f64,
    yield_count: u32,
    margin_percent: f64,
) -> Result<Costing> {
    validate_cost("ingredient cost", ingredient_cost)?;
    validate_cost("packaging cost", packaging_cost)?;
    validate_margin(margin_percent)?;

    let yield_count = NonZeroU32::new(yield_count).ok_or_else(|| Error::DivisionByZero {
        context: "cost per unit with a yield of 0 units".to_string(),
    })?;

    Ok(Costing::for_batch(
        ingredient_cost,
        packaging_cost,
        yield_count,
        margin_percent,
    ))
}

/// Margin that turns `cost` into `sell_price`, as a percentage.
///
/// # Errors
/// Returns [`Error::DivisionByZero`] when `cost` is zero, and [`Error::Validation`]
/// when either value is negative or not finite.
pub fn implied_margin_percent(cost: f64, sell_price: f64) -> Result<f64> {
    validate_cost("cost", cost)?;
    validate_cost("sell price", sell_price)?;

    if cost == 0.0 {
        return Err(Error::DivisionByZero {
            context: "margin of a product with zero cost".to_string(),
        });
    }

    Ok((sell_price / cost - 1.0) * 100.0)
}

/// Advisory classification of a margin. Nothing is enforced from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginAdvice {
    /// The sale price is below cost
    BelowCost,
    /// Under the recommended band
    Low,
    /// Inside the recommended band
    Recommended,
    /// Above the recommended band
    High,
}

/// Classifies a margin against [`RECOMMENDED_MARGIN`]. Advisory only.
#[must_use]
pub fn margin_advice(margin_percent: f64) -> MarginAdvice {
    if margin_percent < 0.0 {
        MarginAdvice::BelowCost
    } else if margin_percent < *RECOMMENDED_MARGIN.start() {
        MarginAdvice::Low
    } else if RECOMMENDED_MARGIN.contains(&margin_percent) {
        MarginAdvice::Recommended
    } else {
        MarginAdvice::High
    }
}

/// Rejects negative, NaN and infinite monetary amounts.
pub(crate) fn validate_cost(label: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::validation(format!(
            "The {label} must be a non-negative amount, got {value}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_margin(margin_percent: f64) -> Result<()> {
    if !margin_percent.is_finite() {
        return Err(Error::validation(format!(
            "Margin must be a finite percentage, got {margin_percent}"
        )));
    }
    Ok(())
}
