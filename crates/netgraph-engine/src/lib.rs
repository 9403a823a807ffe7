//! # netgraph-engine
//!
//! The computation layer for netgraph: four interchangeable algorithms over
//! one topology snapshot, a dispatch surface for selecting between them,
//! and [`NetworkDb`], an embeddable owner that serializes access to a
//! mutable graph and hands out cached snapshots.
//!
//! ## Modules
//!
//! - [`algorithms`] - Dijkstra, A*, Bellman-Ford, Edmonds-Karp
//! - [`compute`] - Algorithm selection and comparison mode
//! - [`database`] - NetworkDb lifecycle and snapshot caching

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod compute;
pub mod database;

pub use algorithms::{PathResult, astar, bellman_ford, dijkstra, max_flow};
pub use compute::{Algorithm, AlgorithmRun, compute, compute_all};
pub use database::NetworkDb;
