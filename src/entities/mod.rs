//! Entity module - Typed records for everything a costing session holds.
//! Records are built through validating constructors, so invalid drafts never reach
//! the ledgers or the calculator.

pub mod ingredient;
pub mod plan;
pub mod product;
pub mod unit;

pub use ingredient::{Ingredient, IngredientDraft};
pub use plan::PlanTier;
pub use product::{Product, ProductDraft};
pub use unit::Unit;
