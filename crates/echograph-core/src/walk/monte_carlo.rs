//! Stochastic Monte-Carlo sampling (§4.5.2).

use nalgebra::DVector;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::cancellation::CancellationToken;
use crate::config::MonteCarloParams;
use crate::error::Error;
use crate::kernel::MarkovKernel;

/// Simulate a walk of `steps` transitions from each seed, accumulating
/// visit counts over every node in the walk — the start plus all `steps`
/// nodes reached by transitioning — and return the normalized empirical
/// distribution.
///
/// `seed_indices` are the raw, possibly-duplicate per-walk start indices in
/// seed order (not deduplicated support of `π₀`): a seed repeated twice
/// produces two independent walks. Reproducible given the same kernel,
/// seeds, params, and `seed_rng`.
pub fn run(
    kernel: &MarkovKernel,
    seed_indices: &[usize],
    params: &MonteCarloParams,
    seed_rng: u64,
    cancellation: &CancellationToken,
) -> Result<DVector<f64>, Error> {
    let n = kernel.n();
    let mut counts = DVector::<f64>::zeros(n);
    let mut rng = ChaCha8Rng::seed_from_u64(seed_rng);

    for &start in seed_indices {
        let mut current = start;
        counts[current] += 1.0;
        for _ in 0..params.steps {
            if cancellation.is_cancelled() {
                return Err(Error::Cancelled);
            }
            current = sample_next(kernel, current, &mut rng);
            counts[current] += 1.0;
        }
    }

    let total = counts.sum();
    debug!(total, "monte carlo walks complete");
    Ok(counts / total)
}

/// Sample the next node from `P[current, :]`, restricted to positive
/// entries and renormalized defensively (should already sum to 1, but
/// floating-point drift can leave a tiny residual).
fn sample_next(kernel: &MarkovKernel, current: usize, rng: &mut ChaCha8Rng) -> usize {
    let row = kernel.row(current);
    let total: f64 = row.iter().copied().filter(|&p| p > 0.0).sum();
    let mut draw = rng.gen::<f64>() * total;

    for (idx, &p) in row.iter().enumerate() {
        if p <= 0.0 {
            continue;
        }
        if draw < p {
            return idx;
        }
        draw -= p;
    }

    current
}
