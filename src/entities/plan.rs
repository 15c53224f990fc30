//! Plan entity - The account tier that decides product quotas and AI access.

use crate::errors::{Error, Result};
use std::{fmt, str::FromStr};

/// Account class of the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanTier {
    /// Quota-limited tier
    #[default]
    Free,
    /// Unlimited tier
    Pro,
}

impl PlanTier {
    /// Whether the tier lifts the product quota and AI gate.
    #[must_use]
    pub const fn is_pro(self) -> bool {
        matches!(self, Self::Pro)
    }

    /// Lowercase label, as accepted by `PRECIFICA_PLAN`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
        }
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "pro" => Ok(Self::Pro),
            other => Err(Error::Config {
                message: format!("Unknown plan tier: {other:?} (expected \"free\" or \"pro\")"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_plan_tier() {
        assert_eq!("free".parse::<PlanTier>().unwrap(), PlanTier::Free);
        assert_eq!("PRO".parse::<PlanTier>().unwrap(), PlanTier::Pro);
        assert!(matches!(
            "gold".parse::<PlanTier>(),
            Err(Error::Config { .. })
        ));
    }

    #[test]
    fn test_default_is_free() {
        assert_eq!(PlanTier::default(), PlanTier::Free);
        assert!(!PlanTier::default().is_pro());
    }
}
