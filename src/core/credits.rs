//! Credit business logic - Mock credit balance for AI-assisted actions.
//!
//! Every AI-assisted action has a fixed credit cost. An action is only allowed when
//! the balance covers the cost, and the balance can never drop below zero: the
//! `u32` balance plus the checked debit below enforce that in the ledger itself,
//! not in whatever displays the confirmation.

use crate::errors::{Error, Result};
use chrono::{DateTime, Utc};
use std::fmt;

/// Whether `balance` covers `cost`.
#[must_use]
pub const fn can_afford(balance: u32, cost: u32) -> bool {
    balance >= cost
}

/// Returns the balance left after paying `cost`.
///
/// # Errors
/// Returns [`Error::InsufficientCredits`] when the balance does not cover the cost.
pub fn debit(balance: u32, cost: u32) -> Result<u32> {
    balance
        .checked_sub(cost)
        .ok_or(Error::InsufficientCredits { balance, cost })
}

/// Credits still missing to afford `cost`; zero when affordable.
#[must_use]
pub const fn shortfall(balance: u32, cost: u32) -> u32 {
    cost.saturating_sub(balance)
}

/// AI-assisted actions and their fixed prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AiAction {
    /// Marketing copy for a product
    ProductDescription,
    /// Review of a product's margin
    MarginAnalysis,
    /// Price adjustment for the season
    SeasonalPricing,
    /// Recipes that use up expiring ingredients
    RecipeSuggestions,
    /// Ideas for a healthy product line
    HealthyLineExploration,
}

impl AiAction {
    /// Credits charged per run.
    #[must_use]
    pub const fn cost(self) -> u32 {
        match self {
            Self::ProductDescription => 1,
            Self::MarginAnalysis | Self::RecipeSuggestions => 3,
            Self::SeasonalPricing => 5,
            Self::HealthyLineExploration => 7,
        }
    }

    /// Label recorded in the credit history.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ProductDescription => "Product description generated",
            Self::MarginAnalysis => "Margin analysis",
            Self::SeasonalPricing => "Seasonal price suggestion",
            Self::RecipeSuggestions => "Recipes for expiring ingredients",
            Self::HealthyLineExploration => "Healthy product line exploration",
        }
    }
}

/// Credit packs available for purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreditPackage {
    /// 50 credits
    Starter,
    /// 150 credits
    Standard,
    /// 350 credits
    Premium,
}

impl CreditPackage {
    /// Packs in display order.
    pub const ALL: [Self; 3] = [Self::Starter, Self::Standard, Self::Premium];

    /// Credits added on purchase.
    #[must_use]
    pub const fn credits(self) -> u32 {
        match self {
            Self::Starter => 50,
            Self::Standard => 150,
            Self::Premium => 350,
        }
    }

    /// Price in BRL.
    #[must_use]
    pub const fn price(self) -> f64 {
        match self {
            Self::Starter => 9.90,
            Self::Standard => 19.90,
            Self::Premium => 39.90,
        }
    }

    /// Price in BRL of a single credit.
    #[must_use]
    pub fn price_per_credit(self) -> f64 {
        self.price() / f64::from(self.credits())
    }
}

impl fmt::Display for CreditPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Starter => "starter",
            Self::Standard => "standard",
            Self::Premium => "premium",
        };
        f.write_str(name)
    }
}

/// Direction of a credit history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    /// Credits charged for an action
    Spent,
    /// Credits added by a pack
    Gained,
}

/// One entry of the credit history.
#[derive(Debug, Clone, PartialEq)]
pub struct CreditActivity {
    /// Spent or gained
    pub kind: ActivityKind,
    /// What the credits were for
    pub description: String,
    /// Credits moved
    pub amount: u32,
    /// When it happened
    pub at: DateTime<Utc>,
}

/// What a confirmation dialog shows before an action is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebitPreview {
    /// Credits the action costs
    pub cost: u32,
    /// Credits available now
    pub balance: u32,
    /// Balance after the debit, `None` if it cannot be afforded
    pub remaining: Option<u32>,
}

impl DebitPreview {
    /// Whether the action can be charged.
    #[must_use]
    pub const fn is_affordable(&self) -> bool {
        self.remaining.is_some()
    }

    /// Credits missing to afford the action.
    #[must_use]
    pub const fn shortfall(&self) -> u32 {
        shortfall(self.balance, self.cost)
    }
}

/// Session credit balance plus its history.
#[derive(Debug, Clone, Default)]
pub struct CreditLedger {
    balance: u32,
    activity: Vec<CreditActivity>,
}

impl CreditLedger {
    /// Ledger with an initial balance and empty history.
    #[must_use]
    pub const fn new(balance: u32) -> Self {
        Self {
            balance,
            activity: Vec::new(),
        }
    }

    /// Credits available.
    #[must_use]
    pub const fn balance(&self) -> u32 {
        self.balance
    }

    /// History, oldest first.
    #[must_use]
    pub fn activity(&self) -> &[CreditActivity] {
        &self.activity
    }

    /// What charging `action` would do, without charging it.
    #[must_use]
    pub const fn preview(&self, action: AiAction) -> DebitPreview {
        DebitPreview {
            cost: action.cost(),
            balance: self.balance,
            remaining: self.balance.checked_sub(action.cost()),
        }
    }

    /// Charges an action and returns the new balance.
    ///
    /// # Errors
    /// Returns [`Error::InsufficientCredits`]; balance and history are unchanged.
    pub fn spend(&mut self, action: AiAction) -> Result<u32> {
        self.balance = debit(self.balance, action.cost())?;
        self.activity.push(CreditActivity {
            kind: ActivityKind::Spent,
            description: action.description().to_string(),
            amount: action.cost(),
            at: Utc::now(),
        });
        Ok(self.balance)
    }

    /// Adds a purchased pack and returns the new balance.
    pub fn top_up(&mut self, package: CreditPackage) -> u32 {
        self.balance = self.balance.saturating_add(package.credits());
        self.activity.push(CreditActivity {
            kind: ActivityKind::Gained,
            description: format!("Purchased {} pack of {} credits", package, package.credits()),
            amount: package.credits(),
            at: Utc::now(),
        });
        self.balance
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::assert_close;

    #[test]
    fn test_debit() {
        assert_eq!(debit(42, 3).unwrap(), 39);
        assert_eq!(debit(3, 3).unwrap(), 0);
        assert!(matches!(
            debit(2, 3),
            Err(Error::InsufficientCredits { balance: 2, cost: 3 })
        ));
    }

    #[test]
    fn test_can_afford_and_shortfall() {
        assert!(can_afford(5, 5));
        assert!(!can_afford(2, 3));
        assert_eq!(shortfall(2, 7), 5);
        assert_eq!(shortfall(10, 7), 0);
    }

    #[test]
    fn test_spend_records_activity() {
        let mut ledger = CreditLedger::new(42);
        assert_eq!(ledger.spend(AiAction::MarginAnalysis).unwrap(), 39);
        assert_eq!(ledger.balance(), 39);

        let entry = &ledger.activity()[0];
        assert_eq!(entry.kind, ActivityKind::Spent);
        assert_eq!(entry.amount, 3);
    }

    #[test]
    fn test_failed_spend_leaves_state_unchanged() {
        let mut ledger = CreditLedger::new(2);
        let result = ledger.spend(AiAction::MarginAnalysis);

        assert!(matches!(result, Err(Error::InsufficientCredits { .. })));
        assert_eq!(ledger.balance(), 2);
        assert!(ledger.activity().is_empty());
    }

    #[test]
    fn test_preview() {
        let ledger = CreditLedger::new(4);
        let ok = ledger.preview(AiAction::MarginAnalysis);
        assert!(ok.is_affordable());
        assert_eq!(ok.remaining, Some(1));

        let short = ledger.preview(AiAction::HealthyLineExploration);
        assert!(!short.is_affordable());
        assert_eq!(short.shortfall(), 3);
    }

    #[test]
    fn test_top_up() {
        let mut ledger = CreditLedger::new(2);
        assert_eq!(ledger.top_up(CreditPackage::Starter), 52);
        assert_eq!(ledger.activity()[0].kind, ActivityKind::Gained);

        let mut full = CreditLedger::new(u32::MAX - 10);
        assert_eq!(full.top_up(CreditPackage::Premium), u32::MAX);
    }

    #[test]
    fn test_package_price_per_credit() {
        assert_close(CreditPackage::Starter.price_per_credit(), 0.198);
        assert_close(CreditPackage::Premium.price_per_credit(), 0.114);
        assert!(
            CreditPackage::Premium.price_per_credit() < CreditPackage::Standard.price_per_credit()
        );
    }
}
