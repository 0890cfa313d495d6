//! # class-loader
//!
//! Resolve class names to source files by probing configurable directory
//! levels, subdirectories and file extensions, with cached resolutions
//! and load-once semantics.
//!
//! ## Architecture
//!
//! - **loader**: Name-to-path resolution over the level/subdir/extension
//!   cross-product, with a per-instance resolution cache
//! - **registry**: Load-once source registry keyed by resolved path
//! - **scan**: Subdirectory enumeration for populating a loader's
//!   subdirectory list
//! - **cli**: Command-line interface definition
//! - **config**: CLI option resolution into loader configuration

pub mod cli;
pub mod config;
pub mod loader;
pub mod registry;
pub mod scan;
