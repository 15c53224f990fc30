//! Plan quota business logic.
//!
//! Free accounts may keep a fixed number of products; pro accounts are unlimited.
//! The gate is a pure predicate so it can be asked as often as the caller likes;
//! surfacing the upgrade prompt on a denial is the caller's job.

use crate::entities::PlanTier;

/// Product cap on the free plan.
pub const DEFAULT_FREE_PRODUCT_LIMIT: usize = 3;

/// Whether one more product may be created.
#[must_use]
pub const fn can_create_product(current_count: usize, tier: PlanTier, free_limit: usize) -> bool {
    match tier {
        PlanTier::Pro => true,
        PlanTier::Free => current_count < free_limit,
    }
}

/// Snapshot of product usage against the plan, for limit indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductQuota {
    /// Products in the catalog
    pub current: usize,
    /// Free plan cap
    pub limit: usize,
    /// Plan of the session
    pub tier: PlanTier,
}

impl ProductQuota {
    /// Snapshot of `current` products against `limit` on `tier`.
    #[must_use]
    pub const fn new(current: usize, limit: usize, tier: PlanTier) -> Self {
        Self {
            current,
            limit,
            tier,
        }
    }

    /// Whether one more product may be created.
    #[must_use]
    pub const fn allows_new(&self) -> bool {
        can_create_product(self.current, self.tier, self.limit)
    }

    /// Whether the plan blocks new products.
    #[must_use]
    pub const fn is_limit_reached(&self) -> bool {
        !self.allows_new()
    }

    /// Slots left on the free plan; `None` when the plan is unlimited.
    #[must_use]
    pub const fn remaining(&self) -> Option<usize> {
        match self.tier {
            PlanTier::Pro => None,
            PlanTier::Free => Some(self.limit.saturating_sub(self.current)),
        }
    }

    /// Share of the quota in use, as a percentage.
    ///
    /// Pro plans always report 100. A zero free limit is reported as full.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.tier.is_pro() || self.limit == 0 {
            return 100.0;
        }

        // Cast safety: product counts are tiny.
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.current as f64 / self.limit as f64;
        ratio * 100.0
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_can_create_product() {
        assert!(!can_create_product(3, PlanTier::Free, 3));
        assert!(can_create_product(2, PlanTier::Free, 3));
        assert!(can_create_product(999, PlanTier::Pro, 3));
        assert!(!can_create_product(0, PlanTier::Free, 0));
    }

    #[test]
    fn test_gate_is_repeatable() {
        for _ in 0..3 {
            assert!(!can_create_product(3, PlanTier::Free, 3));
        }
    }

    #[test]
    fn test_quota_free_plan() {
        let quota = ProductQuota::new(2, 3, PlanTier::Free);
        assert!(quota.allows_new());
        assert_eq!(quota.remaining(), Some(1));
        assert!((quota.progress_percent() - 66.666_666).abs() < 1e-4);

        let full = ProductQuota::new(3, 3, PlanTier::Free);
        assert!(full.is_limit_reached());
        assert_eq!(full.remaining(), Some(0));
        assert_eq!(full.progress_percent(), 100.0);
    }

    #[test]
    fn test_quota_over_limit_after_downgrade() {
        let quota = ProductQuota::new(5, 3, PlanTier::Free);
        assert!(quota.is_limit_reached());
        assert_eq!(quota.remaining(), Some(0));
    }

    #[test]
    fn test_quota_pro_plan() {
        let quota = ProductQuota::new(12, 3, PlanTier::Pro);
        assert!(quota.allows_new());
        assert_eq!(quota.remaining(), None);
        assert_eq!(quota.progress_percent(), 100.0);
    }

    #[test]
    fn test_quota_zero_limit_reports_full() {
        let quota = ProductQuota::new(0, 0, PlanTier::Free);
        assert_eq!(quota.progress_percent(), 100.0);
        assert!(quota.is_limit_reached());
        assert_eq!(quota.remaining(), Some(0));
    }
}
