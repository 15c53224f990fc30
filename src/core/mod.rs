//! Core business logic - framework-agnostic costing, ledger, quota and credit operations.

/// Parsing of free-text cost labels such as "R$ 5,50 por 1kg"
pub mod cost_label;
/// Per-unit cost and sale price calculation
pub mod costing;
/// Mock credit balance gating AI-assisted actions
pub mod credits;
/// Injectable field extraction from photos
pub mod extraction;
/// Ingredient ledger and stock aggregates
pub mod ingredient;
/// Two-step onboarding conversation
pub mod onboarding;
/// Product catalog
pub mod product;
/// Plan tier product quota
pub mod quota;
/// Summaries and display formatting
pub mod report;
