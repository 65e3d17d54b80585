use crate::StoreError;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Copies `path` into `dir` under a timestamped name and prunes the oldest
/// copies beyond `keep`. An existing snapshot with the same name is kept.
pub fn snapshot(path: &Path, dir: &Path, keep: usize) -> Result<(), StoreError> {
    fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("deck");
    let ts = chrono::Local::now().format("%Y%m%d-%H%M%S%.3f");
    let target = dir.join(format!("{stem}-{ts}.csv"));
    if target.exists() {
        info!(backup = %target.display(), "backup already taken");
    } else {
        fs::copy(path, &target).map_err(|e| StoreError::io(&target, e))?;
        info!(backup = %target.display(), "backed up deck");
    }

    if let Err(e) = rotate(dir, stem, keep) {
        warn!(dir = %dir.display(), error = %e, "could not prune old backups");
    }
    Ok(())
}

fn rotate(dir: &Path, stem: &str, keep: usize) -> std::io::Result<()> {
    let prefix = format!("{stem}-");
    let mut entries: Vec<_> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.starts_with(&prefix) && name.ends_with(".csv")
        })
        .collect();
    entries.sort_by_key(|e| (e.metadata().and_then(|m| m.modified()).ok(), e.file_name()));
    if entries.len() > keep {
        for e in &entries[..entries.len() - keep] {
            let _ = fs::remove_file(e.path());
        }
    }
    Ok(())
}
