//! The solver abstraction: a closed tagged variant over the two random-walk
//! algorithms (§4.5, §9 "Dynamic dispatch of solvers").

mod monte_carlo;
mod power_iteration;

use nalgebra::DVector;

use crate::cancellation::CancellationToken;
use crate::config::{MonteCarloParams, PowerIterationParams};
use crate::error::Error;
use crate::index::NodeIndex;
use crate::kernel::MarkovKernel;

/// Which solver to run, with its parameters.
#[derive(Debug, Clone)]
pub enum WalkStrategy {
    /// Deterministic power iteration with restart.
    PowerIteration(PowerIterationParams),
    /// Stochastic Monte-Carlo sampling, seeded for reproducibility.
    MonteCarlo { params: MonteCarloParams, rng_seed: u64 },
}

impl WalkStrategy {
    /// Run the selected solver to produce `π`, given the kernel, the
    /// restart distribution `π₀`, and the raw seed node names (in seed
    /// order, with duplicates preserved — a seed listened to twice drives
    /// two independent Monte-Carlo walks even though it contributes a
    /// single, deduplicated mass to `π₀`).
    pub fn run(
        &self,
        kernel: &MarkovKernel,
        pi0: &DVector<f64>,
        seeds: &[String],
        index: &NodeIndex,
        cancellation: &CancellationToken,
    ) -> Result<DVector<f64>, Error> {
        match self {
            WalkStrategy::PowerIteration(params) => power_iteration::run(kernel, pi0, params),
            WalkStrategy::MonteCarlo { params, rng_seed } => {
                let seed_indices: Vec<usize> = seeds
                    .iter()
                    .filter_map(|name| index.node_to_idx(name))
                    .collect();
                monte_carlo::run(kernel, &seed_indices, params, *rng_seed, cancellation)
            }
        }
    }
}
