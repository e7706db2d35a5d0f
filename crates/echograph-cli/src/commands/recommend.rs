//! Run a recommendation query against a filesystem snapshot store.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use echograph_core::config::{MarkovStrategies, RandomWalkParams};
use echograph_core::recommender::{RecommendationRequest, Recommender};
use echograph_core::store::DebugFileStore;
use echograph_core::walk::WalkStrategy;

/// Run a recommendation query.
#[derive(Args)]
pub struct RecommendArgs {
    /// Path to a JSON snapshot document (see `DebugFileStore`).
    pub snapshot: PathBuf,

    /// Named markov strategy to use (defaults to the configuration's
    /// declared default).
    #[arg(long)]
    pub markov_strategy: Option<String>,

    /// External markov configuration document, merged over the built-ins.
    #[arg(long)]
    pub markov_config: Option<PathBuf>,

    /// Which solver to run.
    #[arg(long, value_enum, default_value_t = WalkStrategyArg::PowerIteration)]
    pub walk_strategy: WalkStrategyArg,

    /// RNG seed for the Monte-Carlo solver.
    #[arg(long, default_value_t = 0)]
    pub rng_seed: u64,

    /// External random-walk parameters document.
    #[arg(long)]
    pub random_walk_config: Option<PathBuf>,

    /// How many recent listenings to seed the walk from.
    #[arg(long, default_value_t = 20)]
    pub n_last_listenings: usize,

    /// How many recommendations to return.
    #[arg(long, default_value_t = 10)]
    pub top_k: usize,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum WalkStrategyArg {
    PowerIteration,
    MonteCarlo,
}

pub fn run(args: RecommendArgs) -> anyhow::Result<()> {
    let strategies = match &args.markov_config {
        Some(path) => MarkovStrategies::load_merged(path)
            .with_context(|| format!("loading markov configuration from '{}'", path.display()))?,
        None => MarkovStrategies::built_in().context("loading built-in markov configuration")?,
    };

    let walk_params = match &args.random_walk_config {
        Some(path) => RandomWalkParams::load(path)
            .with_context(|| format!("loading random-walk configuration from '{}'", path.display()))?,
        None => RandomWalkParams::built_in().context("loading built-in random-walk configuration")?,
    };

    let walk_strategy = match args.walk_strategy {
        WalkStrategyArg::PowerIteration => WalkStrategy::PowerIteration(walk_params.power_iteration),
        WalkStrategyArg::MonteCarlo => WalkStrategy::MonteCarlo {
            params: walk_params.monte_carlo,
            rng_seed: args.rng_seed,
        },
    };

    let store = DebugFileStore::new(&args.snapshot);
    let recommender = Recommender::new(&store, &strategies);

    let request = RecommendationRequest {
        markov_strategy: args.markov_strategy.clone(),
        walk_strategy,
        n_last_listenings: args.n_last_listenings,
        top_k: args.top_k,
    };

    let track_ids = recommender.recommend(&request).context("running recommendation query")?;

    for track_id in track_ids {
        println!("{track_id}");
    }

    Ok(())
}
