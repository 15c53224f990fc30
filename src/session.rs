//! Session context - Everything one user's costing session owns.
//!
//! The session bundles the ingredient ledger, the product catalog, the credit
//! ledger and the plan tier into one value the caller owns and passes around.
//! It is where the components meet: product creation consults the quota gate,
//! AI actions go through the credit ledger, and onboarding answers become ledger
//! entries. Operations run one at a time and a failed one leaves the session as
//! it was.

use crate::{
    config::{AppConfig, SeedConfig},
    core::{
        cost_label::parse_cost_label,
        credits::{AiAction, CreditLedger, CreditPackage},
        ingredient::IngredientLedger,
        onboarding::CapturedIngredient,
        product::ProductCatalog,
        quota::ProductQuota,
        report::InventorySummary,
    },
    entities::{Ingredient, IngredientDraft, PlanTier, Product, ProductDraft},
    errors::{Error, Result},
};
use tracing::{debug, info, warn};

/// One user's ledgers, catalog, credits and plan.
#[derive(Debug, Clone)]
pub struct Session {
    plan: PlanTier,
    free_product_limit: usize,
    ingredients: IngredientLedger,
    products: ProductCatalog,
    credits: CreditLedger,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub fn new(plan: PlanTier, free_product_limit: usize, starting_credits: u32) -> Self {
        Self {
            plan,
            free_product_limit,
            ingredients: IngredientLedger::new(),
            products: ProductCatalog::new(),
            credits: CreditLedger::new(starting_credits),
        }
    }

    /// Creates a session from settings and fills it with seed data.
    ///
    /// Seeded products skip the quota gate: they model what the account already
    /// holds, which may exceed the free limit after a downgrade.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] if a seeded record breaks an invariant.
    pub fn from_config(config: &AppConfig, seed: &SeedConfig) -> Result<Self> {
        let mut session = Self::new(config.plan, config.free_product_limit, config.starting_credits);

        for ingredient in &seed.ingredients {
            let draft = ingredient.to_draft();
            match ingredient.last_purchase_date {
                Some(date) => session.ingredients.add_ingredient_dated(draft, date)?,
                None => session.ingredients.add_ingredient(draft)?,
            };
        }

        for product in &seed.products {
            session.products.add_product(product.to_draft())?;
        }

        if session.quota().current > session.free_product_limit && !session.plan.is_pro() {
            warn!(
                "Seed holds {} products, above the free limit of {}",
                session.products.len(),
                session.free_product_limit
            );
        }

        info!(
            "Session ready: {} ingredients, {} products, {} credits, {} plan",
            session.ingredients.len(),
            session.products.len(),
            session.credits.balance(),
            session.plan
        );
        Ok(session)
    }

    /// Current plan tier.
    #[must_use]
    pub const fn plan(&self) -> PlanTier {
        self.plan
    }

    /// Switches plan tier, e.g. after an upgrade. Existing products are kept.
    pub fn set_plan(&mut self, plan: PlanTier) {
        info!("Plan changed from {} to {}", self.plan, plan);
        self.plan = plan;
    }

    /// The ingredient ledger.
    #[must_use]
    pub const fn ingredients(&self) -> &IngredientLedger {
        &self.ingredients
    }

    /// The product catalog.
    #[must_use]
    pub const fn products(&self) -> &ProductCatalog {
        &self.products
    }

    /// The credit balance and history.
    #[must_use]
    pub const fn credits(&self) -> &CreditLedger {
        &self.credits
    }

    /// Adds an ingredient bought today.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] for an invalid draft.
    pub fn add_ingredient(&mut self, draft: IngredientDraft) -> Result<&Ingredient> {
        let ingredient = self.ingredients.add_ingredient(draft)?;
        debug!("Added ingredient {} ({})", ingredient.id(), ingredient.name());
        Ok(ingredient)
    }

    /// # Errors
    /// Returns [`Error::IngredientNotFound`] for an unknown id.
    pub fn remove_ingredient(&mut self, id: u64) -> Result<Ingredient> {
        let removed = self.ingredients.remove_ingredient(id)?;
        debug!("Removed ingredient {} ({})", id, removed.name());
        Ok(removed)
    }

    /// Turns a finished onboarding exchange into a ledger entry.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] if the cost label cannot be parsed or the
    /// resulting ingredient is invalid.
    pub fn capture_onboarding(&mut self, captured: &CapturedIngredient) -> Result<&Ingredient> {
        let draft = parse_cost_label(&captured.cost_label)?.into_draft(captured.name.clone());
        self.add_ingredient(draft)
    }

    /// Stock totals for the ingredient ledger.
    #[must_use]
    pub fn inventory_summary(&self) -> InventorySummary {
        InventorySummary::from_ledger(&self.ingredients)
    }

    /// Product usage against the plan.
    #[must_use]
    pub fn quota(&self) -> ProductQuota {
        ProductQuota::new(self.products.len(), self.free_product_limit, self.plan)
    }

    /// Creates a product if the plan allows one more.
    ///
    /// # Errors
    /// Returns [`Error::ProductLimitReached`] when the free quota is used up, so the
    /// caller can offer an upgrade, or [`Error::Validation`] for an invalid draft.
    pub fn create_product(&mut self, draft: ProductDraft) -> Result<&Product> {
        let quota = self.quota();
        if !quota.allows_new() {
            warn!(
                "Product creation blocked: {}/{} on the {} plan",
                quota.current, quota.limit, quota.tier
            );
            return Err(Error::ProductLimitReached {
                current: quota.current,
                limit: quota.limit,
            });
        }

        let product = self.products.add_product(draft)?;
        info!("Created product {} ({})", product.id(), product.name());
        Ok(product)
    }

    /// # Errors
    /// Returns [`Error::ProductNotFound`] for an unknown id.
    pub fn remove_product(&mut self, id: u64) -> Result<Product> {
        let removed = self.products.remove_product(id)?;
        debug!("Removed product {} ({})", id, removed.name());
        Ok(removed)
    }

    /// # Errors
    /// Returns [`Error::ProductNotFound`] or [`Error::Validation`].
    pub fn reprice_product(&mut self, id: u64, margin_percent: f64) -> Result<&Product> {
        self.products.reprice_product(id, margin_percent)
    }

    /// Charges the credits for an AI-assisted action and returns the new balance.
    ///
    /// # Errors
    /// Returns [`Error::InsufficientCredits`] when the balance is too low.
    pub fn run_ai_action(&mut self, action: AiAction) -> Result<u32> {
        self.credits
            .spend(action)
            .inspect(|balance| {
                info!(
                    "Charged {} credits for {:?}, {balance} left",
                    action.cost(),
                    action
                );
            })
            .inspect_err(|e| warn!("AI action {:?} refused: {}", action, e))
    }

    /// Adds a purchased credit pack and returns the new balance.
    pub fn top_up(&mut self, package: CreditPackage) -> u32 {
        let balance = self.credits.top_up(package);
        info!("Added {} credits ({package} pack), {balance} available", package.credits());
        balance
    }
}
