//! The heterogeneous listening graph: its container (`builder`) and the
//! algorithm that populates one from entities (`assembler`).

mod assembler;
mod builder;

pub use assembler::assemble_graph;
pub use builder::{EdgeData, Graph, NodeData, PgIndex};
