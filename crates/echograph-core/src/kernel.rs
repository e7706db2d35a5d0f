//! Building the dense, row-stochastic Markov transition matrix `P` from a
//! graph and a type transition matrix (§4.3).

use nalgebra::DMatrix;
use tracing::{debug, warn};

use crate::config::TypeTransitionMatrix;
use crate::error::Error;
use crate::graph::Graph;
use crate::index::NodeIndex;
use crate::node::{NodeId, NodeType};

/// The `n×n` row-stochastic transition matrix, plus the index it was built
/// against (row/column `i` corresponds to `index.idx_to_node(i)`).
#[derive(Debug, Clone)]
pub struct MarkovKernel {
    matrix: DMatrix<f64>,
}

impl MarkovKernel {
    /// Number of rows/columns.
    pub fn n(&self) -> usize {
        self.matrix.nrows()
    }

    /// Row `u` of `P`, copied out as a plain vector.
    pub fn row(&self, u: usize) -> Vec<f64> {
        (0..self.matrix.ncols()).map(|v| self.matrix[(u, v)]).collect()
    }

    /// The underlying dense matrix.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Build `P` from a graph and a type transition matrix, following the
    /// per-row construction in SPEC_FULL.md §4.3.
    pub fn build(graph: &Graph, index: &NodeIndex, type_matrix: &TypeTransitionMatrix) -> Result<Self, Error> {
        let n = index.n();
        let mut matrix = DMatrix::<f64>::zeros(n, n);

        for u in 0..n {
            let name = index.idx_to_node(u).expect("index in range");
            let u_node = NodeId::parse(name).expect("index names are well-formed node ids");
            let u_pg = graph.index_of(u_node).expect("indexed node exists in graph");
            let tau_u = graph.node_type(u_pg);

            let neighbors: Vec<_> = graph.neighbors(u_pg).collect();
            if neighbors.is_empty() {
                matrix[(u, u)] = 1.0;
                continue;
            }

            let mut by_type: std::collections::HashMap<NodeType, Vec<usize>> = std::collections::HashMap::new();
            for v_pg in neighbors {
                let v_type = graph.node_type(v_pg);
                let v_idx = index
                    .node_to_idx(&graph.node_id(v_pg).to_string())
                    .expect("neighbor is present in index");
                by_type.entry(v_type).or_default().push(v_idx);
            }

            let row_probs = type_matrix.get(&tau_u);
            let mut raw: std::collections::HashMap<NodeType, f64> = std::collections::HashMap::new();
            let mut s = 0.0;
            for (&t, members) in &by_type {
                if members.is_empty() {
                    continue;
                }
                let p = row_probs.and_then(|r| r.get(&t)).copied().unwrap_or(0.0);
                raw.insert(t, p);
                s += p;
            }

            if s == 0.0 {
                warn!(node = name, "no authorized outgoing mass, absorbing as dangling");
                matrix[(u, u)] = 1.0;
                continue;
            }

            for (t, members) in by_type {
                if members.is_empty() {
                    continue;
                }
                let q = raw.get(&t).copied().unwrap_or(0.0) / s;
                let share = q / members.len() as f64;
                for v in members {
                    matrix[(u, v)] = share;
                }
            }
        }

        let kernel = MarkovKernel { matrix };
        kernel.validate()?;

        debug!(n, "built markov kernel");
        Ok(kernel)
    }

    fn validate(&self) -> Result<(), Error> {
        for u in 0..self.matrix.nrows() {
            let mut sum = 0.0;
            for v in 0..self.matrix.ncols() {
                let p = self.matrix[(u, v)];
                if p < 0.0 {
                    return Err(Error::KernelInvariant(format!(
                        "negative transition probability P[{u},{v}] = {p}"
                    )));
                }
                sum += p;
            }
            if (sum - 1.0).abs() > 1e-8 {
                return Err(Error::KernelInvariant(format!(
                    "row {u} sums to {sum}, not 1"
                )));
            }
        }
        Ok(())
    }
}
