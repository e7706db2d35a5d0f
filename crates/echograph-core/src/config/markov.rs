//! Loading and validating the type-transition-matrix configuration (§6.2).

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;
use crate::node::NodeType;

/// The built-in strategies, embedded at compile time so a query never fails
/// purely because a configuration file is missing. Mirrors this codebase's
/// habit of bundling factory presets alongside a crate's other config
/// assets.
const DEFAULT_MARKOV_YAML: &str = include_str!("../../assets/default_markov.yaml");

/// `T[src_type][dst_type]`, already validated to have rows summing to 1.
pub type TypeTransitionMatrix = HashMap<NodeType, HashMap<NodeType, f64>>;

#[derive(Debug, Deserialize)]
struct RawDocument {
    markov: RawMarkov,
}

#[derive(Debug, Deserialize)]
struct RawMarkov {
    default_strategy: String,
    strategies: HashMap<String, RawStrategy>,
}

#[derive(Debug, Deserialize)]
struct RawStrategy {
    type_transition_probabilities: HashMap<String, HashMap<String, f64>>,
}

/// A named collection of type-transition matrices plus which one is used
/// when no strategy is explicitly requested.
#[derive(Debug, Clone)]
pub struct MarkovStrategies {
    default_strategy: String,
    strategies: HashMap<String, TypeTransitionMatrix>,
}

impl MarkovStrategies {
    /// The strategies built into the binary (`balanced`, `exploration`).
    pub fn built_in() -> Result<Self, Error> {
        Self::from_yaml_str(DEFAULT_MARKOV_YAML)
    }

    /// Parse a YAML document of the shape described in SPEC_FULL.md §6.2.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, Error> {
        let doc: RawDocument = serde_yaml::from_str(yaml)?;
        Self::from_raw(doc.markov)
    }

    /// Load a document from disk, then merge it over the built-in
    /// strategies: strategies named in the file override built-ins of the
    /// same name and are added alongside the rest; the file's
    /// `default_strategy` takes precedence.
    pub fn load_merged(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        let overrides = Self::from_yaml_str(&content)?;

        let mut merged = Self::built_in()?;
        merged.strategies.extend(overrides.strategies);
        merged.default_strategy = overrides.default_strategy;
        Ok(merged)
    }

    fn from_raw(raw: RawMarkov) -> Result<Self, Error> {
        let mut strategies = HashMap::with_capacity(raw.strategies.len());
        for (name, strategy) in raw.strategies {
            strategies.insert(name, validate_matrix(strategy.type_transition_probabilities)?);
        }
        if !strategies.contains_key(&raw.default_strategy) {
            return Err(Error::ConfigInvalid(format!(
                "default_strategy '{}' is not among the declared strategies",
                raw.default_strategy
            )));
        }
        Ok(MarkovStrategies {
            default_strategy: raw.default_strategy,
            strategies,
        })
    }

    /// Resolve a strategy by name, or the configured default if `name` is
    /// `None`.
    pub fn resolve(&self, name: Option<&str>) -> Result<&TypeTransitionMatrix, Error> {
        let name = name.unwrap_or(&self.default_strategy);
        self.strategies
            .get(name)
            .ok_or_else(|| Error::ConfigInvalid(format!("unknown markov strategy '{name}'")))
    }
}

fn validate_matrix(raw: HashMap<String, HashMap<String, f64>>) -> Result<TypeTransitionMatrix, Error> {
    let mut matrix = TypeTransitionMatrix::new();

    for (src, row) in raw {
        let src_type: NodeType = src
            .parse()
            .map_err(|e| Error::ConfigInvalid(format!("unknown source type '{src}': {e}")))?;

        let mut parsed_row = HashMap::with_capacity(row.len());
        let mut sum = 0.0;
        for (dst, p) in row {
            let dst_type: NodeType = dst
                .parse()
                .map_err(|e| Error::ConfigInvalid(format!("unknown destination type '{dst}': {e}")))?;
            sum += p;
            parsed_row.insert(dst_type, p);
        }

        if (sum - 1.0).abs() > 1e-8 {
            return Err(Error::ConfigInvalid(format!(
                "type-transition row for '{src}' sums to {sum}, not 1"
            )));
        }

        matrix.insert(src_type, parsed_row);
    }

    Ok(matrix)
}
