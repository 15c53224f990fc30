//! Application settings read from environment variables.
//!
//! `main` loads a `.env` file first (via `dotenvy`), so any of these can live there.
//! Every setting has a default; a variable that is set but unparsable is an error
//! rather than being silently ignored.

use crate::{
    core::quota::DEFAULT_FREE_PRODUCT_LIMIT,
    entities::PlanTier,
    errors::{Error, Result},
};
use std::{env::VarError, path::PathBuf, str::FromStr};

/// Credits a fresh session starts with.
pub const DEFAULT_STARTING_CREDITS: u32 = 42;

/// Default location of the seed file.
pub const DEFAULT_SEED_PATH: &str = "config.toml";

/// Session-wide settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Plan tier of the session (`PRECIFICA_PLAN`)
    pub plan: PlanTier,
    /// Product cap on the free plan (`PRECIFICA_FREE_PRODUCT_LIMIT`)
    pub free_product_limit: usize,
    /// Initial credit balance (`PRECIFICA_STARTING_CREDITS`)
    pub starting_credits: u32,
    /// Seed file with sample ingredients and products (`PRECIFICA_SEED_PATH`)
    pub seed_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            plan: PlanTier::Free,
            free_product_limit: DEFAULT_FREE_PRODUCT_LIMIT,
            starting_credits: DEFAULT_STARTING_CREDITS,
            seed_path: PathBuf::from(DEFAULT_SEED_PATH),
        }
    }
}

impl AppConfig {
    /// Loads settings from the process environment.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if a variable is set to an unparsable value and
    /// [`Error::EnvVar`] if one is not valid Unicode.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_var)
    }

    /// Loads settings through an arbitrary key lookup.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if a looked-up value cannot be parsed, or
    /// whatever error the lookup itself reports.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Result<Option<String>>,
    {
        let defaults = Self::default();

        Ok(Self {
            plan: parse_var(&lookup, "PRECIFICA_PLAN")?.unwrap_or(defaults.plan),
            free_product_limit: parse_var(&lookup, "PRECIFICA_FREE_PRODUCT_LIMIT")?
                .unwrap_or(defaults.free_product_limit),
            starting_credits: parse_var(&lookup, "PRECIFICA_STARTING_CREDITS")?
                .unwrap_or(defaults.starting_credits),
            seed_path: lookup("PRECIFICA_SEED_PATH")?
                .map_or(defaults.seed_path, PathBuf::from),
        })
    }
}

/// Reads a process environment variable; unset is `None`, not an error.
fn env_var(key: &str) -> Result<Option<String>> {
    match std::env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Result<Option<String>>,
{
    lookup(key)?
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| Error::Config {
                message: format!("Invalid value {raw:?} for {key}: {e}"),
            })
        })
        .transpose()
}
