//! Load and validate a markov/random-walk configuration document without
//! running a query.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use echograph_core::config::{MarkovStrategies, RandomWalkParams};

/// Validate a markov strategies document, a random-walk parameters
/// document, or both.
#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Markov strategies YAML document to validate, merged over the
    /// built-ins.
    #[arg(long)]
    pub markov_config: Option<PathBuf>,

    /// Random-walk parameters YAML document to validate.
    #[arg(long)]
    pub random_walk_config: Option<PathBuf>,
}

pub fn run(args: ValidateConfigArgs) -> anyhow::Result<()> {
    match &args.markov_config {
        Some(path) => {
            MarkovStrategies::load_merged(path)
                .with_context(|| format!("markov configuration '{}' is invalid", path.display()))?;
            println!("markov configuration '{}': OK", path.display());
        }
        None => {
            MarkovStrategies::built_in().context("built-in markov configuration is invalid")?;
            println!("built-in markov configuration: OK");
        }
    }

    match &args.random_walk_config {
        Some(path) => {
            RandomWalkParams::load(path)
                .with_context(|| format!("random-walk configuration '{}' is invalid", path.display()))?;
            println!("random-walk configuration '{}': OK", path.display());
        }
        None => {
            RandomWalkParams::built_in().context("built-in random-walk configuration is invalid")?;
            println!("built-in random-walk configuration: OK");
        }
    }

    Ok(())
}
