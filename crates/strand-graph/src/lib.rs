//! Directed dependency graph APIs used by `strand`.
//!
//! This crate contains the core [`Graph`] container plus the ordering
//! algorithms built on it: [`alg::find_cycle`] and [`TopoSorter`]. The
//! container is single-threaded; `sort` and `find_cycle` never mutate their
//! input and are safe to call concurrently on different graphs.

pub mod alg;
mod graph;
mod topo;

pub use graph::{Graph, Node};
pub use topo::{TopoResult, TopoSorter};
