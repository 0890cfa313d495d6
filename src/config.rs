use anyhow::Result;

use crate::cli::Cli;
use crate::loader::{ClassLoader, DEFAULT_EXTENSION, DEFAULT_LEVEL};
use crate::scan::all_sub_dirs;

pub fn resolve_levels(cli: &Cli) -> Vec<String> {
    if cli.levels.is_empty() {
        return vec![DEFAULT_LEVEL.to_string()];
    }
    cli.levels.clone()
}

pub fn resolve_sub_dirs(cli: &Cli) -> Result<Vec<String>> {
    let mut sub_dirs = cli.sub_dirs.clone();
    if let Some(root) = &cli.scan_subdirs {
        sub_dirs.extend(all_sub_dirs(root)?);
    }
    Ok(sub_dirs)
}

pub fn resolve_extensions(cli: &Cli) -> Vec<String> {
    if cli.extensions.is_empty() {
        return vec![DEFAULT_EXTENSION.to_string()];
    }
    cli.extensions.clone()
}

pub fn build_loader(cli: &Cli) -> Result<ClassLoader> {
    let mut loader = ClassLoader::new(
        resolve_levels(cli),
        resolve_sub_dirs(cli)?,
        resolve_extensions(cli),
    );
    loader.set_debug_mode(cli.debug);
    Ok(loader)
}
