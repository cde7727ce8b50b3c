//! recipectl CLI - operational tooling for the recipe API
//!
//! This is the main entry point for the recipectl command-line tool:
//! - Database readiness gate for container startup (`wait-for-db`)
//! - One-shot readiness probe for health checks (`check-db`)
//! - Configuration inspection (`config` subcommand)
//! - Shell completions (`completions` subcommand)

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "recipectl",
    author,
    version,
    about = "Operational tooling for the recipe API",
    long_about = "Operational tooling for the recipe API. Use `recipectl wait-for-db` as a \
                  container entrypoint step to hold startup until PostgreSQL accepts connections."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still wins when set)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces to an OTLP endpoint (requires the telemetry feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Block until the database accepts connections
    WaitForDb(commands::wait_for_db::WaitForDbArgs),
    /// Probe the database once and report whether it is ready
    CheckDb(commands::check_db::CheckDbArgs),
    /// Inspect recipectl configuration (path, show)
    Config(commands::config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })
    .ok();
    recipectl_core::load_dotenv();

    let result = match cli.command {
        Commands::WaitForDb(args) => commands::run_wait_for_db(args).await,
        Commands::CheckDb(args) => commands::run_check_db(args).await,
        Commands::Config(args) => commands::run_config(args),
        Commands::Completions(args) => run_completions(args),
    };

    tracing_setup::shutdown_otel();
    result
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
