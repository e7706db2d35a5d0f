//! Building the seed distribution `π₀` a walk starts (and, for power
//! iteration, restarts) from (§4.4).

use nalgebra::DVector;
use tracing::warn;

use crate::error::Error;
use crate::index::NodeIndex;

/// Build `π₀` from a set of seed node names: uniform mass over every seed
/// present in `index`, zero elsewhere. Seeds absent from the graph are
/// dropped with a warning rather than treated as an error; only an entirely
/// empty result after filtering is a failure.
pub fn build_initial_distribution(seeds: &[String], index: &NodeIndex) -> Result<DVector<f64>, Error> {
    let present: Vec<usize> = seeds
        .iter()
        .filter_map(|name| match index.node_to_idx(name) {
            Some(i) => Some(i),
            None => {
                warn!(seed = name, "seed node absent from graph, dropping");
                None
            }
        })
        .collect();

    if present.is_empty() {
        return Err(Error::NoValidSeeds);
    }

    let mass = 1.0 / present.len() as f64;
    let mut pi0 = DVector::<f64>::zeros(index.n());
    for i in present {
        pi0[i] = mass;
    }
    Ok(pi0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> NodeIndex {
        NodeIndex::new(["track:1".to_string(), "track:2".to_string(), "artist:1".to_string()]).unwrap()
    }

    #[test]
    fn uniform_mass_over_present_seeds() {
        let idx = index();
        let pi0 = build_initial_distribution(&["track:1".to_string(), "track:2".to_string()], &idx).unwrap();
        assert_eq!(pi0[0], 0.5);
        assert_eq!(pi0[1], 0.5);
        assert_eq!(pi0[2], 0.0);
    }

    #[test]
    fn drops_seeds_absent_from_graph() {
        let idx = index();
        let pi0 = build_initial_distribution(&["track:1".to_string(), "track:99".to_string()], &idx).unwrap();
        assert_eq!(pi0[0], 1.0);
    }

    #[test]
    fn all_seeds_missing_is_error() {
        let idx = index();
        let err = build_initial_distribution(&["track:99".to_string()], &idx).unwrap_err();
        assert!(matches!(err, Error::NoValidSeeds));
    }

    #[test]
    fn empty_seed_list_is_error() {
        let idx = index();
        let err = build_initial_distribution(&[], &idx).unwrap_err();
        assert!(matches!(err, Error::NoValidSeeds));
    }
}
