//! Node identity: the closed set of entity types and their stable names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of node types that may appear in the listening graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Album,
    Artist,
    Tag,
    Track,
}

impl NodeType {
    /// All node types, in a fixed, stable order.
    pub const ALL: [NodeType; 4] = [
        NodeType::Album,
        NodeType::Artist,
        NodeType::Tag,
        NodeType::Track,
    ];

    fn as_str(self) -> &'static str {
        match self {
            NodeType::Album => "album",
            NodeType::Artist => "artist",
            NodeType::Tag => "tag",
            NodeType::Track => "track",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "album" => Ok(NodeType::Album),
            "artist" => Ok(NodeType::Artist),
            "tag" => Ok(NodeType::Tag),
            "track" => Ok(NodeType::Track),
            other => Err(format!("unknown node type '{other}'")),
        }
    }
}

/// Stable identity of a graph node: its type plus the store's integer id for
/// the underlying record.
///
/// The integer id is whatever the entity store assigns; the core never
/// interprets it beyond printing it into, and parsing it back out of, the
/// node's name (see [`NodeId::name`] and [`NodeId::parse`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub node_type: NodeType,
    pub id: u64,
}

impl NodeId {
    pub fn new(node_type: NodeType, id: u64) -> Self {
        NodeId { node_type, id }
    }

    /// The node's stable external name, `"<type>:<id>"`.
    pub fn name(self) -> String {
        format!("{}:{}", self.node_type, self.id)
    }

    /// Parse a node name of the form `"<type>:<id>"`.
    pub fn parse(name: &str) -> Result<Self, String> {
        let (ty, id) = name
            .split_once(':')
            .ok_or_else(|| format!("malformed node name '{name}'"))?;
        let node_type = ty.parse()?;
        let id = id
            .parse()
            .map_err(|_| format!("malformed node id in '{name}'"))?;
        Ok(NodeId { node_type, id })
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
