//! Loading the random-walk solver parameters (§6.2, power iteration and
//! Monte Carlo).

use std::path::Path;

use serde::Deserialize;

use crate::error::Error;

const DEFAULT_RANDOM_WALK_YAML: &str = include_str!("../../assets/default_random_walk.yaml");

#[derive(Debug, Deserialize)]
struct RawDocument {
    random_walk: RandomWalkParams,
}

/// Parameters for both solvers, as a single configuration unit: callers
/// typically load one and hand the relevant half to whichever
/// [`crate::walk::WalkStrategy`] they picked.
#[derive(Debug, Clone, Deserialize)]
pub struct RandomWalkParams {
    pub power_iteration: PowerIterationParams,
    pub monte_carlo: MonteCarloParams,
}

/// Parameters for the deterministic power-iteration-with-restart solver.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PowerIterationParams {
    /// Restart probability back to the seed distribution, in `(0, 1]`.
    pub alpha: f64,
    /// L1 convergence tolerance between successive iterates.
    pub tol: f64,
    /// Hard cap on iterations, in case `tol` is never reached.
    pub max_iter: usize,
}

/// Parameters for the stochastic Monte-Carlo sampling solver.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MonteCarloParams {
    /// Number of steps to simulate per walk.
    pub steps: usize,
}

impl RandomWalkParams {
    /// The parameters built into the binary.
    pub fn built_in() -> Result<Self, Error> {
        Self::from_yaml_str(DEFAULT_RANDOM_WALK_YAML)
    }

    /// Parse a YAML document of the shape described in SPEC_FULL.md §6.2.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, Error> {
        let doc: RawDocument = serde_yaml::from_str(yaml)?;
        doc.random_walk.validate()
    }

    /// Load a document from disk. Unlike [`MarkovStrategies::load_merged`][m],
    /// the document must be complete: random-walk parameters are a single
    /// unit, not a set of named strategies to merge.
    ///
    /// [m]: super::markov::MarkovStrategies::load_merged
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    fn validate(self) -> Result<Self, Error> {
        if !(self.power_iteration.alpha > 0.0 && self.power_iteration.alpha <= 1.0) {
            return Err(Error::ConfigInvalid(format!(
                "power_iteration.alpha must be in (0, 1], got {}",
                self.power_iteration.alpha
            )));
        }
        if self.power_iteration.tol <= 0.0 {
            return Err(Error::ConfigInvalid(format!(
                "power_iteration.tol must be positive, got {}",
                self.power_iteration.tol
            )));
        }
        if self.power_iteration.max_iter == 0 {
            return Err(Error::ConfigInvalid(
                "power_iteration.max_iter must be at least 1".to_string(),
            ));
        }
        if self.monte_carlo.steps == 0 {
            return Err(Error::ConfigInvalid(
                "monte_carlo.steps must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_parameters_parse_and_validate() {
        let params = RandomWalkParams::built_in().unwrap();
        assert!(params.power_iteration.alpha > 0.0);
        assert!(params.monte_carlo.steps > 0);
    }

    #[test]
    fn zero_alpha_is_rejected() {
        let yaml = r#"
random_walk:
  power_iteration: { alpha: 0.0, tol: 0.000001, max_iter: 1000 }
  monte_carlo: { steps: 1000 }
"#;
        let err = RandomWalkParams::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid(_)));
    }

    #[test]
    fn zero_steps_is_rejected() {
        let yaml = r#"
random_walk:
  power_iteration: { alpha: 0.15, tol: 0.000001, max_iter: 1000 }
  monte_carlo: { steps: 0 }
"#;
        let err = RandomWalkParams::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid(_)));
    }
}
