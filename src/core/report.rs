//! Report generation business logic.
//!
//! This module turns ledger and catalog state into summaries and display strings:
//! BRL currency formatting, inventory totals, pricing lines, quota indicators and the
//! share card posted to social networks. Everything here is framework-agnostic and
//! returns plain data or strings for whatever front-end renders them.

use crate::{
    core::{credits::DebitPreview, ingredient::IngredientLedger, quota::ProductQuota},
    entities::{Ingredient, PlanTier, Product},
};

/// Aggregates over the ingredient ledger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventorySummary {
    /// Number of ingredients
    pub count: usize,
    /// Σ quantity × unit price
    pub total_stock_value: f64,
    /// Mean unit price, zero when empty
    pub average_unit_price: f64,
}

impl InventorySummary {
    /// Aggregates the current ledger contents.
    #[must_use]
    pub fn from_ledger(ledger: &IngredientLedger) -> Self {
        Self {
            count: ledger.len(),
            total_stock_value: ledger.total_stock_value(),
            average_unit_price: ledger.average_unit_price(),
        }
    }
}

/// Formats an amount as Brazilian reais, e.g. `R$ 1.234,56`.
///
/// Works from the decimal rendering rather than integer cents, so amounts of any
/// magnitude keep their digits. Values that round to zero carry no sign.
#[must_use]
pub fn format_brl(value: f64) -> String {
    let digits = format!("{:.2}", value.abs());
    let Some((whole, fraction)) = digits.split_once('.') else {
        // NaN and infinities
        return format!("R$ {digits}");
    };

    let is_zero = whole.bytes().chain(fraction.bytes()).all(|b| b == b'0');
    let sign = if value.is_sign_negative() && !is_zero { "-" } else { "" };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{sign}R$ {grouped},{fraction}")
}

/// One-line description of an ingredient and its stock value.
#[must_use]
pub fn format_ingredient_line(ingredient: &Ingredient) -> String {
    let supplier = ingredient
        .supplier()
        .map(|s| format!(" | {s}"))
        .unwrap_or_default();

    format!(
        "{} | {} {} x {} = {}{supplier}",
        ingredient.name(),
        ingredient.quantity(),
        ingredient.unit(),
        format_brl(ingredient.unit_price()),
        format_brl(ingredient.stock_value()),
    )
}

/// One-line pricing summary for a product.
#[must_use]
pub fn format_product_line(product: &Product) -> String {
    let costing = product.costing();
    format!(
        "{} | yield {} | cost {}/unit | price {}/unit | margin {:.1}%",
        product.name(),
        product.yield_count(),
        format_brl(costing.cost_per_unit),
        format_brl(costing.sell_price_per_unit),
        product.margin_percent(),
    )
}

/// Generates a progress bar string for visual representation.
///
/// Creates a text-based progress bar like: `[████████░░] 80.0%`
///
/// # Arguments
/// * `progress_percent` - Progress percentage (0-100)
/// * `bar_length` - Length of the progress bar in characters (default 10)
#[must_use]
pub fn format_progress_bar(progress_percent: f64, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let clamped_progress = progress_percent.clamp(0.0, 100.0);

    // Cast safety: clamped_progress ∈ [0, 100], length is small (10-20).
    // Result is mathematically in [0, length], truncation/sign loss intentional for display.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((clamped_progress / 100.0) * length as f64).round() as usize;
    let empty = length.saturating_sub(filled);

    let filled_str = "█".repeat(filled);
    let empty_str = "░".repeat(empty);

    format!("[{filled_str}{empty_str}] {progress_percent:.1}%")
}

/// Product usage line for the limit indicator.
#[must_use]
pub fn format_quota(quota: &ProductQuota) -> String {
    match (quota.tier, quota.remaining()) {
        (PlanTier::Pro, _) | (PlanTier::Free, None) => {
            format!("Products: {} (pro, unlimited)", quota.current)
        }
        (PlanTier::Free, Some(0)) => format!(
            "Products: {}/{} {} - limit reached, upgrade to pro for more",
            quota.current,
            quota.limit,
            format_progress_bar(quota.progress_percent(), None),
        ),
        (PlanTier::Free, Some(remaining)) => format!(
            "Products: {}/{} {} - {remaining} remaining on the free plan",
            quota.current,
            quota.limit,
            format_progress_bar(quota.progress_percent(), None),
        ),
    }
}

/// Confirmation text for a pending credit debit.
#[must_use]
pub fn format_debit_preview(preview: &DebitPreview) -> String {
    match preview.remaining {
        Some(remaining) => format!(
            "Cost: {} credits | balance: {} | after: {remaining}",
            preview.cost, preview.balance
        ),
        None => format!(
            "Insufficient credits: {} needed, {} available, recharge {} more",
            preview.cost,
            preview.balance,
            preview.shortfall()
        ),
    }
}

/// Social media card advertising a product at its per-unit price.
#[must_use]
pub fn share_card(product: &Product) -> String {
    format!(
        "🍰 {}\n💰 {} cada\n📦 Rende {} unidades\n\n#precificaai #doces #negocio",
        product.name(),
        format_brl(product.costing().sell_price_per_unit),
        product.yield_count(),
    )
}
