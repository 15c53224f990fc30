//! Configuration - Session settings and seed data.

/// Session settings from environment variables
pub mod app;

/// Sample ingredient and product loading from config.toml
pub mod seed;

pub use app::AppConfig;
pub use seed::{SeedConfig, load_seed, load_seed_or_default};
