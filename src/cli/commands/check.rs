//! Check command implementation.

use crate::models::config::Config;
use crate::preflight;
use crate::{Error, Result};
use colored::Colorize;

/// Run preflight checks and report the outcome.
pub async fn check(config: &Config) -> Result<()> {
    println!("{}", "Running preflight checks...".bold());
    println!();

    let results = preflight::run_preflight_checks(config);
    preflight::print_results(&results);
    println!();

    if !preflight::all_passed(&results) {
        return Err(Error::other(
            "Preflight checks failed. Fix the issues above and try again.",
        ));
    }

    println!("{}", "✅ All checks passed".green());
    Ok(())
}
