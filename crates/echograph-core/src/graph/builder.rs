//! The low-level, entity-agnostic graph container: typed nodes, authorized
//! typed edges, idempotent inserts.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex as PetNodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::error::Error;
use crate::node::{NodeId, NodeType};
use crate::relation::{relation_for, RelationType};

/// Data carried by a graph node: just its stable identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeData {
    pub id: NodeId,
}

/// Data carried by a graph edge: its authorized relation and weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeData {
    pub relation: RelationType,
    pub weight: f64,
}

/// Index type used by the underlying petgraph storage.
pub type PgIndex = PetNodeIndex<u32>;

/// An undirected, typed multigraph of listening-history entities.
///
/// Nodes are inserted idempotently (`emplace`): a second insert of the same
/// [`NodeId`] is a no-op and returns the existing index. Edges are validated
/// against the authorized-relation set at insert time and collapse when
/// inserted twice, with the most recent weight winning.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    inner: UnGraph<NodeData, EdgeData>,
    by_id: HashMap<NodeId, PgIndex>,
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            inner: UnGraph::default(),
            by_id: HashMap::new(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn index_of(&self, id: NodeId) -> Option<PgIndex> {
        self.by_id.get(&id).copied()
    }

    pub fn node_id(&self, idx: PgIndex) -> NodeId {
        self.inner[idx].id
    }

    pub fn node_type(&self, idx: PgIndex) -> NodeType {
        self.inner[idx].id.node_type
    }

    /// Insert a node if it is not already present; duplicate inserts are
    /// no-ops (invariant: every node has a unique identifier).
    pub fn emplace(&mut self, id: NodeId) -> PgIndex {
        if let Some(&idx) = self.by_id.get(&id) {
            return idx;
        }
        let idx = self.inner.add_node(NodeData { id });
        self.by_id.insert(id, idx);
        idx
    }

    /// Insert an edge between two node ids, validating the relation and
    /// emplacing both endpoints first. A second insert between the same
    /// endpoints overwrites the weight rather than creating a parallel edge.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, weight: Option<f64>) -> Result<(), Error> {
        let relation = relation_for(u.node_type, v.node_type)?;
        let a = self.emplace(u);
        let b = self.emplace(v);
        let data = EdgeData {
            relation: relation.name,
            weight: weight.unwrap_or(relation.default_weight),
        };
        self.inner.update_edge(a, b, data);
        Ok(())
    }

    /// Neighbor indices of a node, each with the edge weight toward it.
    pub fn neighbors(&self, idx: PgIndex) -> impl Iterator<Item = PgIndex> + '_ {
        self.inner.neighbors(idx)
    }

    /// Nodes in insertion order. Since nodes are never removed, this is the
    /// same order [`crate::index::NodeIndex`] assigns integer positions in.
    pub fn node_indices(&self) -> impl Iterator<Item = PgIndex> + '_ {
        self.inner.node_indices()
    }

    /// The edge weight between two adjacent nodes, if any.
    pub fn edge_weight(&self, a: PgIndex, b: PgIndex) -> Option<f64> {
        self.inner
            .edges(a)
            .find(|e| e.target() == b || e.source() == b)
            .map(|e| e.weight().weight)
    }
}
