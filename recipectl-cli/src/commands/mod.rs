//! Command implementations for recipectl CLI

pub mod check_db;
pub mod config;
pub mod wait_for_db;

use anyhow::{Context, Result};
use recipectl_core::RecipeConfig;
use recipectl_db::PgProbe;

// Re-export main dispatcher functions for flat access from main.rs
pub use check_db::run_check_db;
pub use config::run_config;
pub use wait_for_db::run_wait_for_db;

fn load_config() -> Result<RecipeConfig> {
    RecipeConfig::load().context("Failed to load recipectl configuration")
}

/// Probe for a configured alias, with the configured per-attempt timeout.
///
/// Unknown aliases and malformed URLs fail here, before any attempt.
fn probe_for(config: &RecipeConfig, alias: &str) -> Result<PgProbe> {
    let db = config.database(alias)?;
    let probe = PgProbe::from_config(db)
        .with_context(|| format!("Invalid connection settings for database '{}'", alias))?;
    Ok(probe.with_timeout(config.readiness.probe_timeout()))
}
