use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use recipectl_core::RecipeConfig;

use super::load_config;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Print the resolved configuration (file + environment), passwords masked
    Show,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Path => run_path(),
        ConfigCommands::Show => run_show(),
    }
}

fn run_path() -> Result<()> {
    println!("{}", RecipeConfig::config_path().display());
    Ok(())
}

fn run_show() -> Result<()> {
    let path = RecipeConfig::config_path();
    let config = load_config()?;

    let toml_str = config
        .redacted()
        .to_toml_string()
        .context("Failed to serialize config to TOML")?;

    if path.exists() {
        println!("# {}", path.display());
    } else {
        println!("# {} (not found: defaults + environment)", path.display());
    }
    println!("{}", toml_str);

    Ok(())
}
