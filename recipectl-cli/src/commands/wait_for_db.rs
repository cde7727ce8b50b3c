//! wait-for-db - block container startup until the database is up
//!
//! Typical entrypoint:
//!   recipectl wait-for-db && exec ./server
//!
//! Retries forever on "not up yet" errors; anything else exits non-zero
//! straight away.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use recipectl_core::{GatePolicy, ReadinessGate, DEFAULT_ALIAS};
use tracing::info;

use super::{load_config, probe_for};

#[derive(Parser, Debug)]
pub struct WaitForDbArgs {
    /// Database alias to wait for
    #[arg(long, value_name = "ALIAS", default_value = DEFAULT_ALIAS)]
    pub database: String,

    /// Seconds between attempts (overrides readiness.interval_secs)
    #[arg(long, value_name = "SECS")]
    pub interval: Option<u64>,

    /// Give up after this many failed attempts (default: retry forever)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,
}

pub async fn run_wait_for_db(args: WaitForDbArgs) -> Result<()> {
    let config = load_config()?;
    let probe = probe_for(&config, &args.database)?;

    let mut policy = GatePolicy::from(&config.readiness);
    if let Some(secs) = args.interval {
        policy.interval = Duration::from_secs(secs);
    }
    if args.max_attempts.is_some() {
        policy.max_attempts = args.max_attempts;
    }

    info!(
        database = %args.database,
        endpoint = %config.database(&args.database)?.describe(),
        interval_secs = policy.interval.as_secs(),
        max_attempts = ?policy.max_attempts,
        "waiting for database"
    );

    let mut gate = ReadinessGate::new(args.database.clone(), probe).policy(policy);
    gate.wait()
        .await
        .with_context(|| format!("Database '{}' did not become ready", args.database))?;

    Ok(())
}
