//! Class-name to source-file resolution with cached results.
//!
//! A `ClassLoader` probes the cross-product of its configured directory
//! levels, subdirectories and file extensions for `Name.ext`, loads the
//! first existing candidate and remembers the resolved path, so later
//! lookups for the same name never touch the filesystem again.

use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;

use crate::registry::SourceRegistry;

pub const DEFAULT_LEVEL: &str = ".";
pub const DEFAULT_EXTENSION: &str = ".php";

#[derive(Debug)]
pub struct ClassLoader {
    level_dirs: Vec<String>,
    sub_dirs: Vec<String>,
    extensions: Vec<String>,
    debug_mode: bool,
    cache: HashMap<String, String>,
    registry: SourceRegistry,
}

impl Default for ClassLoader {
    fn default() -> Self {
        Self::new(
            vec![DEFAULT_LEVEL.to_string()],
            Vec::new(),
            vec![DEFAULT_EXTENSION.to_string()],
        )
    }
}

impl ClassLoader {
    /// Creates a loader that probes the given levels, subdirectories and
    /// extensions, in the given order. An empty list is treated as a
    /// single empty segment, which contributes nothing to candidate
    /// paths.
    pub fn new(level_dirs: Vec<String>, sub_dirs: Vec<String>, extensions: Vec<String>) -> Self {
        Self {
            level_dirs: normalize_segments(level_dirs),
            sub_dirs: normalize_segments(sub_dirs),
            extensions: normalize_segments(extensions),
            debug_mode: false,
            cache: HashMap::new(),
            registry: SourceRegistry::new(),
        }
    }

    /// Tries to load the class with the given name.
    ///
    /// The name doubles as the extension-free file name. Candidates are
    /// probed as `level/subdir/Name.ext`, levels outermost, extensions
    /// innermost; the first existing file is cached and loaded. A cached
    /// name is loaded straight from its recorded path with no existence
    /// check. Returns `Ok(false)` when no candidate exists; nothing is
    /// cached in that case.
    pub fn load(&mut self, class_name: &str) -> Result<bool> {
        if let Some(path) = self.cache.get(class_name).cloned() {
            self.print_resolution(&path, true);
            self.registry.ensure_loaded(&path)?;
            return Ok(true);
        }

        for level in &self.level_dirs {
            for sub_dir in &self.sub_dirs {
                for extension in &self.extensions {
                    let path = make_path(level, sub_dir, class_name, extension);
                    if self.debug_mode {
                        eprintln!("[class-loader] trying path: '{path}'");
                    }
                    if Path::new(&path).is_file() {
                        self.cache.insert(class_name.to_string(), path.clone());
                        self.print_resolution(&path, false);
                        self.registry.ensure_loaded(&path)?;
                        return Ok(true);
                    }
                }
            }
        }

        Ok(false)
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    pub fn set_debug_mode(&mut self, debug_mode: bool) {
        self.debug_mode = debug_mode;
    }

    /// Path a name previously resolved to, if any.
    pub fn cached_path(&self, class_name: &str) -> Option<&str> {
        self.cache.get(class_name).map(String::as_str)
    }

    /// Source contents of a previously loaded name, if any.
    pub fn source(&self, class_name: &str) -> Option<&str> {
        self.cache
            .get(class_name)
            .and_then(|path| self.registry.get(path))
    }

    pub fn loaded_units(&self) -> usize {
        self.registry.loaded_units()
    }

    fn print_resolution(&self, path: &str, was_cached: bool) {
        if !self.debug_mode {
            return;
        }
        let kind = if was_cached { "cached path" } else { "path" };
        eprintln!("[class-loader] found in {kind}: {path}");
    }
}

/// Builds a candidate path as `level/subdir/Name.ext`. Empty segments
/// contribute nothing; backslashes are normalized to forward slashes.
pub fn make_path(level: &str, sub_dir: &str, class_name: &str, extension: &str) -> String {
    let mut path = format!("{class_name}{extension}");
    if !sub_dir.is_empty() {
        path = format!("{sub_dir}/{path}");
    }
    if !level.is_empty() {
        path = format!("{level}/{path}");
    }
    path.replace('\\', "/")
}

fn normalize_segments(mut segments: Vec<String>) -> Vec<String> {
    if segments.is_empty() {
        segments.push(String::new());
    }
    segments
}
