use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::deps::{self, Direction};
use crate::error::{Error, Result};
use crate::graph::{Graph, TopoResult, TopoSorter};

/// Computes the bundling order for every file under `root`: each file comes
/// after everything it requires, ties broken by ascending canonical path so
/// the order is reproducible across runs.
pub fn bundle_order(root: &Path) -> Result<Vec<String>> {
    let map = deps::dependency_map(root, Direction::RequiredBy)?;
    let graph = Graph::from_adjacency(map);
    match TopoSorter::by_id().sort(&graph) {
        TopoResult::Order(ids) => Ok(ids),
        TopoResult::Cycle(chain) => Err(Error::DependencyCycle { chain }),
    }
}

/// Writes the ordered concatenation of every file under `root` into `out`
/// and returns the order that was written.
pub fn write_bundle(root: &Path, out: &mut dyn Write) -> Result<Vec<String>> {
    let order = bundle_order(root)?;
    for id in &order {
        let contents = fs::read(id).map_err(|source| Error::Io {
            path: PathBuf::from(id),
            source,
        })?;
        out.write_all(&contents)
            .map_err(|source| Error::Write { source })?;
    }
    debug!(files = order.len(), "bundle written");
    Ok(order)
}
