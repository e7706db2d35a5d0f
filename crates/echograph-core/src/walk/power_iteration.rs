//! Deterministic power iteration with restart (§4.5.1).

use nalgebra::DVector;
use tracing::{debug, trace};

use crate::config::PowerIterationParams;
use crate::error::Error;
use crate::kernel::MarkovKernel;

/// Run `π ← α·π₀ + (1−α)·π·P` to convergence (or `max_iter`), starting from
/// `π₀`.
pub fn run(kernel: &MarkovKernel, pi0: &DVector<f64>, params: &PowerIterationParams) -> Result<DVector<f64>, Error> {
    let mut pi = pi0.clone();

    for iter in 0..params.max_iter {
        let next = params.alpha * pi0 + (1.0 - params.alpha) * (pi.transpose() * kernel.matrix()).transpose();

        if !next.iter().all(|v| v.is_finite()) {
            return Err(Error::SolverDiverged(
                "power iteration produced a non-finite value".to_string(),
            ));
        }

        let delta = (&next - &pi).abs().sum();
        pi = next;
        trace!(iter, delta, "power iteration step");

        if delta < params.tol {
            debug!(iter, delta, "power iteration converged");
            return Ok(pi);
        }
    }

    debug!(max_iter = params.max_iter, "power iteration hit max_iter without converging");
    Ok(pi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MarkovStrategies;
    use crate::entity::{Artist, Track};
    use crate::graph::assemble_graph;
    use crate::index::NodeIndex;
    use crate::initial_distribution::build_initial_distribution;

    #[test]
    fn converges_to_a_distribution() {
        let tracks = vec![
            Track { id: 1, album_id: None, artist_ids: vec![1] },
            Track { id: 2, album_id: None, artist_ids: vec![1] },
        ];
        let artists = vec![Artist { id: 1, similar_artist_ids: vec![], tag_ids: vec![] }];
        let graph = assemble_graph(&tracks, &artists, &[], &[]).unwrap();
        let names: Vec<String> = graph.node_indices().map(|i| graph.node_id(i).to_string()).collect();
        let index = NodeIndex::new(names).unwrap();
        let strategies = MarkovStrategies::built_in().unwrap();
        let matrix = strategies.resolve(Some("balanced")).unwrap();
        let kernel = MarkovKernel::build(&graph, &index, matrix).unwrap();
        let pi0 = build_initial_distribution(&["track:1".to_string()], &index).unwrap();

        let params = PowerIterationParams { alpha: 0.15, tol: 1e-6, max_iter: 1000 };
        let pi = run(&kernel, &pi0, &params).unwrap();

        assert!((pi.sum() - 1.0).abs() < 1e-6);
        assert!(pi.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn dangling_seed_concentrates_mass_on_itself() {
        let tracks = vec![Track { id: 1, album_id: None, artist_ids: vec![] }];
        let graph = assemble_graph(&tracks, &[], &[], &[]).unwrap();
        let names: Vec<String> = graph.node_indices().map(|i| graph.node_id(i).to_string()).collect();
        let index = NodeIndex::new(names).unwrap();
        let strategies = MarkovStrategies::built_in().unwrap();
        let matrix = strategies.resolve(Some("balanced")).unwrap();
        let kernel = MarkovKernel::build(&graph, &index, matrix).unwrap();
        let pi0 = build_initial_distribution(&["track:1".to_string()], &index).unwrap();

        let params = PowerIterationParams { alpha: 0.15, tol: 1e-6, max_iter: 1000 };
        let pi = run(&kernel, &pi0, &params).unwrap();

        assert!((pi[0] - 1.0).abs() < 1e-6);
    }
}
