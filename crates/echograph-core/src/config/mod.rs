//! Layered YAML configuration: built-in defaults embedded at compile time,
//! optionally overridden by an external document (§6.2, §10.3).

mod markov;
mod random_walk;

pub use markov::{MarkovStrategies, TypeTransitionMatrix};
pub use random_walk::{MonteCarloParams, PowerIterationParams, RandomWalkParams};
