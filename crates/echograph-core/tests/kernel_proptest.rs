//! Property tests for the markov kernel invariants in §8: row stochasticity,
//! non-negativity, and uniform-within-type distribution.

use proptest::prelude::*;

use echograph_core::config::MarkovStrategies;
use echograph_core::entity::{Artist, Track};
use echograph_core::graph::assemble_graph;
use echograph_core::index::NodeIndex;
use echograph_core::kernel::MarkovKernel;

/// Build a small random bipartite-ish track/artist graph: `n_tracks` tracks,
/// each attached to one of `n_artists` artists by `track_id % n_artists`.
fn build_kernel(n_tracks: usize, n_artists: usize, strategy: &str) -> (MarkovKernel, NodeIndex) {
    let n_artists = n_artists.max(1);
    let artists: Vec<Artist> = (0..n_artists)
        .map(|id| Artist { id: id as u64, similar_artist_ids: vec![], tag_ids: vec![] })
        .collect();
    let tracks: Vec<Track> = (0..n_tracks)
        .map(|id| Track {
            id: id as u64,
            album_id: None,
            artist_ids: vec![(id % n_artists) as u64],
        })
        .collect();

    let graph = assemble_graph(&tracks, &artists, &[], &[]).unwrap();
    let names: Vec<String> = graph.node_indices().map(|i| graph.node_id(i).to_string()).collect();
    let index = NodeIndex::new(names).unwrap();
    let strategies = MarkovStrategies::built_in().unwrap();
    let matrix = strategies.resolve(Some(strategy)).unwrap();
    let kernel = MarkovKernel::build(&graph, &index, matrix).unwrap();
    (kernel, index)
}

proptest! {
    #[test]
    fn rows_are_stochastic_and_non_negative(n_tracks in 0usize..30, n_artists in 1usize..6) {
        for strategy in ["balanced", "exploration"] {
            let (kernel, _index) = build_kernel(n_tracks, n_artists, strategy);
            for u in 0..kernel.n() {
                let mut sum = 0.0;
                for v in 0..kernel.n() {
                    let p = kernel.matrix()[(u, v)];
                    prop_assert!(p >= 0.0);
                    sum += p;
                }
                prop_assert!((sum - 1.0).abs() < 1e-8);
            }
        }
    }

    #[test]
    fn same_type_neighbors_get_equal_mass(n_tracks in 2usize..30) {
        let (kernel, index) = build_kernel(n_tracks, 1, "balanced");
        // All tracks share the single artist node; that artist's row must
        // split mass equally across every track neighbor.
        let artist_row = index.node_to_idx("artist:0").unwrap();
        let track_cols: Vec<usize> = (0..n_tracks)
            .map(|id| index.node_to_idx(&format!("track:{id}")).unwrap())
            .collect();
        if let Some(&first) = track_cols.first() {
            let expected = kernel.matrix()[(artist_row, first)];
            for &col in &track_cols {
                prop_assert!((kernel.matrix()[(artist_row, col)] - expected).abs() < 1e-12);
            }
        }
    }
}
