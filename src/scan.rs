use anyhow::Result;
use ignore::WalkBuilder;
use std::path::Path;
use std::sync::mpsc;

/// Enumerates every subdirectory under `root` (the root itself excluded),
/// as sorted `/`-separated strings ready for a loader's subdirectory
/// list.
pub fn all_sub_dirs(root: &Path) -> Result<Vec<String>> {
    let (tx, rx) = mpsc::channel();

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .build_parallel();

    walker.run(|| {
        let tx = tx.clone();
        Box::new(move |entry| {
            if let Ok(entry) = entry
                && entry.file_type().is_some_and(|t| t.is_dir())
            {
                let _ = tx.send(entry.path().to_path_buf());
            }
            ignore::WalkState::Continue
        })
    });

    drop(tx);

    let mut dirs: Vec<String> = rx
        .iter()
        .filter(|path| path.as_path() != root)
        .map(|path| path.to_string_lossy().replace('\\', "/"))
        .collect();
    dirs.sort();
    Ok(dirs)
}
