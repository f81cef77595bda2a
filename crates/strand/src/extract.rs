use std::fs;
use std::path::Path;

use regex::{Captures, Regex};

use crate::error::{Error, Result};

type Extract = Box<dyn Fn(&Captures<'_>) -> Option<String> + Send + Sync>;

/// Extracts strings from text files according to a regex pattern and an
/// extract function applied to every match. The pattern is applied within a
/// single line and never matches across a line boundary; one line can yield
/// several matches.
///
/// Once created, an extractor can be reused across files.
pub struct LineExtractor {
    pattern: Regex,
    extract: Extract,
}

impl LineExtractor {
    pub fn new<F>(pattern: Regex, extract: F) -> Self
    where
        F: Fn(&Captures<'_>) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            pattern,
            extract: Box::new(extract),
        }
    }

    /// Extractor keeping the first capture group of every match.
    pub fn capturing(pattern: Regex) -> Self {
        Self::new(pattern, |caps| caps.get(1).map(|m| m.as_str().to_owned()))
    }

    /// All extracted strings in `line`, in match order. Duplicates are kept.
    pub fn scan_line(&self, line: &str) -> Vec<String> {
        self.pattern
            .captures_iter(line)
            .filter_map(|caps| (self.extract)(&caps))
            .collect()
    }

    /// Scans a whole file, line by line. A file with no matches yields an
    /// empty vector; a path that is not a regular file is an error.
    pub fn find_all(&self, path: &Path) -> Result<Vec<String>> {
        if !path.is_file() {
            return Err(Error::NotAFile {
                path: path.to_path_buf(),
            });
        }
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut found = Vec::new();
        for line in text.lines() {
            found.extend(self.scan_line(line));
        }
        Ok(found)
    }
}
