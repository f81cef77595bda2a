use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::extract::LineExtractor;

// A quoted path token following the requirement keyword, e.g. `require 'a/b'`.
// Several requirements may share one line.
static REQUIRE_RE: OnceLock<Regex> = OnceLock::new();

fn require_extractor() -> LineExtractor {
    let pattern = REQUIRE_RE
        .get_or_init(|| Regex::new(r"require *' *(.*?) *'").expect("require regex must compile"));
    LineExtractor::capturing(pattern.clone())
}

/// Direction of the dependency relation produced by [`dependency_map`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `file -> the files it requires`.
    Requires,
    /// `file -> the files that require it`. Feeding this direction to a
    /// topological sort puts dependencies before their dependents.
    RequiredBy,
}

pub type DependencyMap = FxHashMap<String, FxHashSet<String>>;

/// Scans every file under `root` for requirement statements and returns the
/// dependency relation between them, keyed by canonical absolute path.
///
/// Tokens are resolved relative to `root`; a token that does not name an
/// existing file is dropped. Every scanned file appears as a key in either
/// direction, with an empty set when nothing maps to it, so isolated files
/// are never lost.
pub fn dependency_map(root: &Path, direction: Direction) -> Result<DependencyMap> {
    if !root.is_dir() {
        return Err(Error::RootNotDirectory {
            path: root.to_path_buf(),
        });
    }
    let extractor = require_extractor();
    let mut map = DependencyMap::default();
    scan_tree(root, root, &extractor, direction, &mut map)?;
    Ok(map)
}

fn scan_tree(
    dir: &Path,
    root: &Path,
    extractor: &LineExtractor,
    direction: Direction,
    map: &mut DependencyMap,
) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|source| Error::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| Error::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            scan_tree(&path, root, extractor, direction, map)?;
        } else if path.is_file() {
            scan_file(&path, root, extractor, direction, map);
        }
    }
    Ok(())
}

fn scan_file(
    path: &Path,
    root: &Path,
    extractor: &LineExtractor,
    direction: Direction,
    map: &mut DependencyMap,
) {
    let Some(file_id) = canonical_id(path) else {
        warn!(path = %path.display(), "skipping file without a canonical path");
        return;
    };
    let tokens = match extractor.find_all(path) {
        Ok(tokens) => tokens,
        Err(err) => {
            // Unreadable contents demote the file to a leaf; it stays in the
            // map so dependents can still order against it.
            warn!(path = %path.display(), error = %err, "treating unreadable file as dependency-free");
            Vec::new()
        }
    };

    let mut dependencies: FxHashSet<String> = FxHashSet::default();
    for token in tokens {
        let candidate = root.join(&token);
        if !candidate.is_file() {
            debug!(token = %token, "dropping requirement that does not resolve to a file");
            continue;
        }
        let Some(dep_id) = canonical_id(&candidate) else {
            continue;
        };
        dependencies.insert(dep_id);
    }

    match direction {
        Direction::Requires => {
            map.entry(file_id).or_default().extend(dependencies);
        }
        Direction::RequiredBy => {
            for dep in dependencies {
                map.entry(dep).or_default().insert(file_id.clone());
            }
            map.entry(file_id).or_default();
        }
    }
}

fn canonical_id(path: &Path) -> Option<String> {
    let canonical = fs::canonicalize(path).ok()?;
    Some(canonical.to_string_lossy().into_owned())
}
