//! Requirement scanning and dependency-ordered bundling.
//!
//! [`deps::dependency_map`] walks a directory tree and extracts the
//! `require '<path>'` relation between its files; [`bundle`] turns that
//! relation into a [`graph::Graph`], sorts it deterministically, and writes
//! the ordered concatenation. The graph engine itself lives in
//! [`strand_graph`], re-exported here as [`graph`].

pub mod bundle;
pub mod deps;
mod error;
pub mod extract;

pub use error::{Error, Result};
pub use strand_graph as graph;
