//! Orchestrates a single recommendation query end to end (§4.6).

use tracing::info;

use crate::cancellation::CancellationToken;
use crate::config::MarkovStrategies;
use crate::entity::EntityStore;
use crate::error::Error;
use crate::graph::assemble_graph;
use crate::index::NodeIndex;
use crate::initial_distribution::build_initial_distribution;
use crate::kernel::MarkovKernel;
use crate::node::{NodeId, NodeType};
use crate::walk::WalkStrategy;

/// Everything a single query needs beyond the entity store: which markov
/// strategy and solver to use, how many recent listenings to seed from, and
/// how many results to return.
#[derive(Debug, Clone)]
pub struct RecommendationRequest {
    pub markov_strategy: Option<String>,
    pub walk_strategy: WalkStrategy,
    pub n_last_listenings: usize,
    pub top_k: usize,
}

/// Orchestrates store → graph → kernel → solver → post-filter → ranking.
///
/// Owns nothing beyond the configuration it is constructed with; a query
/// scope's graph, index, and kernel are all local to [`recommend`](Self::recommend)
/// and freed when it returns.
pub struct Recommender<'a> {
    store: &'a dyn EntityStore,
    strategies: &'a MarkovStrategies,
}

impl<'a> Recommender<'a> {
    pub fn new(store: &'a dyn EntityStore, strategies: &'a MarkovStrategies) -> Self {
        Recommender { store, strategies }
    }

    /// Run one recommendation query, returning up to `request.top_k` track
    /// ids, ranked by descending score with ties broken by ascending node
    /// index.
    pub fn recommend(&self, request: &RecommendationRequest) -> Result<Vec<u64>, Error> {
        let tracks = self.store.fetch_all_tracks()?;
        let artists = self.store.fetch_all_artists()?;
        let albums = self.store.fetch_all_albums()?;
        let tags = self.store.fetch_all_tags()?;

        let graph = assemble_graph(&tracks, &artists, &albums, &tags)?;
        if graph.node_count() == 0 {
            return Err(Error::GraphEmpty);
        }

        let names: Vec<String> = graph.node_indices().map(|idx| graph.node_id(idx).to_string()).collect();
        let index = NodeIndex::new(names)?;

        let listenings = self.store.fetch_last_tracks_listened(request.n_last_listenings)?;
        let seeds: Vec<String> = listenings
            .iter()
            .map(|l| NodeId::new(NodeType::Track, l.track_id).to_string())
            .collect();
        let pi0 = build_initial_distribution(&seeds, &index)?;

        let type_matrix = self.strategies.resolve(request.markov_strategy.as_deref())?;
        let kernel = MarkovKernel::build(&graph, &index, type_matrix)?;

        let cancellation = CancellationToken::new();
        let pi = request.walk_strategy.run(&kernel, &pi0, &seeds, &index, &cancellation)?;

        let seed_set: std::collections::HashSet<&str> = seeds.iter().map(String::as_str).collect();
        let mut ranked: Vec<(usize, f64, u64)> = (0..index.n())
            .filter_map(|i| {
                let name = index.idx_to_node(i)?;
                if seed_set.contains(name) {
                    return None;
                }
                let node = NodeId::parse(name).ok()?;
                if node.node_type != NodeType::Track {
                    return None;
                }
                Some((i, pi[i], node.id))
            })
            .collect();

        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal).then(a.0.cmp(&b.0)));
        ranked.truncate(request.top_k);

        let result: Vec<u64> = ranked.into_iter().map(|(_, _, track_id)| track_id).collect();
        info!(
            seeds = seeds.len(),
            results = result.len(),
            "completed recommendation query"
        );
        Ok(result)
    }
}
