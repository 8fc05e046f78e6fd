//! Catalog loading: scan the fragment directory, parse every fragment and
//! union the results into one graph.
//!
//! The scan re-reads every file on each load. Callers go through
//! [`CatalogSource`], so an indexed source can replace the scan later.

use crate::core::Graph;
use crate::error::{CatalogError, Result};
use crate::parsing::turtle_codec::{blank_scope_for, parse_fragment};
use crate::storage::filter::FragmentFilter;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Anything that can produce the asserted (not yet entailed) catalog graph.
pub trait CatalogSource {
    fn load(&self) -> Result<Graph>;
}

/// Loads every fragment found in a single flat directory.
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    directory: PathBuf,
    filter: FragmentFilter,
}

impl DirectoryLoader {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self { directory: directory.into(), filter: FragmentFilter::default() }
    }

    pub fn with_filter(mut self, filter: FragmentFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Fragment files currently visible, sorted by file name.
    ///
    /// A missing directory means nothing was ever written and yields an empty list.
    pub fn list_fragments(&self) -> Result<Vec<PathBuf>> {
        let entries = match fs::read_dir(&self.directory) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(CatalogError::io(&self.directory, e)),
        };

        let mut fragments = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CatalogError::io(&self.directory, e))?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| CatalogError::io(&path, e))?;
            if file_type.is_file() && self.filter.accept(&path) {
                fragments.push(path);
            }
        }

        fragments.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(fragments)
    }

    /// Parses one fragment. Any parse failure names the offending file.
    pub fn read_fragment(&self, path: &Path) -> Result<Graph> {
        let bytes = fs::read(path).map_err(|e| CatalogError::io(path, e))?;
        let graph = parse_fragment(&bytes, path, &blank_scope_for(path))?;
        debug!(fragment = %path.display(), facts = graph.len(), "loaded fragment");
        Ok(graph)
    }
}

impl CatalogSource for DirectoryLoader {
    /// Unions every fragment. One corrupt fragment aborts the whole load,
    /// since a silently shortened catalog is worse than a failed read.
    fn load(&self) -> Result<Graph> {
        let fragments = self.list_fragments()?;

        let mut merged = Graph::new();
        let mut parsed_facts = 0usize;
        for path in &fragments {
            let graph = self.read_fragment(path)?;
            parsed_facts += graph.len();
            merged.union(graph);
        }

        info!(
            directory = %self.directory.display(),
            fragments = fragments.len(),
            parsed_facts,
            distinct_facts = merged.len(),
            "catalog loaded"
        );
        Ok(merged)
    }
}

/// Loads and merges every fragment in `directory`.
pub fn load(directory: impl AsRef<Path>) -> Result<Graph> {
    DirectoryLoader::new(directory.as_ref()).load()
}
