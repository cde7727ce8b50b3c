//! check-db - single readiness probe, no retry
//!
//! Exit 0 when the database answers, non-zero otherwise. Meant for
//! health checks that do their own retrying.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use recipectl_core::{FailureClass, ReadinessProbe, DEFAULT_ALIAS};

use super::{load_config, probe_for};

#[derive(Parser, Debug)]
pub struct CheckDbArgs {
    /// Database alias to check
    #[arg(long, value_name = "ALIAS", default_value = DEFAULT_ALIAS)]
    pub database: String,
}

pub async fn run_check_db(args: CheckDbArgs) -> Result<()> {
    let config = load_config()?;
    let probe = probe_for(&config, &args.database)?;

    let err = match probe.probe().await {
        Ok(()) => {
            println!("✅ Database '{}' is ready", args.database);
            return Ok(());
        }
        Err(err) => err,
    };

    match probe.classify(&err) {
        FailureClass::Transient => {
            println!("Database '{}' unavailable: {}", args.database, err);
            Err(anyhow!("Database '{}' is not ready", args.database))
        }
        FailureClass::Fatal => Err(err)
            .with_context(|| format!("Readiness check for database '{}' failed", args.database)),
    }
}
