//! A typed random-walk recommendation core over a heterogeneous listening
//! graph of tracks, artists, albums, and tags.
//!
//! The pipeline a query runs through is: an [`entity::EntityStore`] supplies
//! normalized entities, [`graph::assemble_graph`] turns them into a typed
//! graph, [`kernel::MarkovKernel`] combines that graph with a
//! [`config::MarkovStrategies`] type-transition matrix into a row-stochastic
//! transition matrix, and a [`walk::WalkStrategy`] runs either power
//! iteration with restart or Monte-Carlo sampling over it.
//! [`recommender::Recommender`] wires all of that together into a single
//! `store → track ids` operation.

pub mod cancellation;
pub mod config;
pub mod entity;
pub mod error;
pub mod graph;
pub mod index;
pub mod initial_distribution;
pub mod kernel;
pub mod node;
pub mod recommender;
pub mod relation;
pub mod store;
pub mod walk;

pub use error::{Error, Result};
pub use recommender::{RecommendationRequest, Recommender};
