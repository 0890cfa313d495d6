//! In-process registry of loaded source units.
//!
//! Loading consults the registry before touching the filesystem, so each
//! distinct path is read at most once per registry lifetime; loading an
//! already-loaded path is a no-op rather than an error.

use anyhow::{Context, Result};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct SourceRegistry {
    sources: HashMap<String, String>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `path` unless it was already loaded. Returns whether the
    /// file was actually read on this call.
    pub fn ensure_loaded(&mut self, path: &str) -> Result<bool> {
        if self.sources.contains_key(path) {
            return Ok(false);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read source file: {path}"))?;
        self.sources.insert(path.to_string(), content);
        Ok(true)
    }

    pub fn is_loaded(&self, path: &str) -> bool {
        self.sources.contains_key(path)
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.sources.get(path).map(String::as_str)
    }

    pub fn loaded_units(&self) -> usize {
        self.sources.len()
    }
}
