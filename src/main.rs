//! Media Stills CLI
//!
//! A command-line tool that extracts still frames from movies and lists them as
//! artwork candidates.

use clap::Parser;
use media_stills::cli::{
    args::{Cli, Commands},
    commands::{check, probe, sample},
};
use media_stills::models::config::{self, Config};
use media_stills::preflight;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let config = match cli.config.as_deref() {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config(),
    };

    // Run the appropriate command
    match cli.command {
        Commands::Sample {
            path,
            count,
            start,
            end,
            artwork_type,
            no_background,
            no_thumb,
            scratch_dir,
            output,
        } => {
            // Run preflight checks unless skipped
            if !cli.skip_preflight {
                run_preflight_checks(&config)?;
            }

            let options = sample::SampleOptions {
                count,
                start,
                end,
                artwork_type,
                no_background,
                no_thumb,
                scratch_dir,
                output,
            };
            sample::sample(&path, options, &config).await?;
        }

        Commands::Probe { path } => {
            probe::probe(&path, &config).await?;
        }

        Commands::Check => {
            check::check(&config).await?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("media_stills=debug")
    } else {
        EnvFilter::new("media_stills=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

/// Run preflight checks and exit if any fail.
fn run_preflight_checks(config: &Config) -> anyhow::Result<()> {
    use colored::Colorize;

    println!("{}", "Running preflight checks...".bold());
    println!();

    let results = preflight::run_preflight_checks(config);
    preflight::print_results(&results);

    println!();

    if !preflight::all_passed(&results) {
        anyhow::bail!("Preflight checks failed. Fix the issues above and try again.");
    }

    Ok(())
}
