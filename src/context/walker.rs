use crate::config::Config;
use crate::context::filter::Filter;
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};

/// Lazily yields allow-listed files beneath `root`, depth-first, with ignored
/// directories pruned before descent. A missing root yields nothing.
pub fn scan<'a>(
    root: &Path,
    filter: &Filter,
    config: &'a Config,
) -> impl Iterator<Item = PathBuf> + use<'a> {
    let walker = root.is_dir().then(|| {
        let prune = filter.clone();
        WalkBuilder::new(root)
            // Only the configured lists decide inclusion
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| !is_pruned(entry, &prune))
            .build()
    });

    walker.into_iter().flatten().filter_map(move |entry_result| {
        match entry_result {
            Ok(entry) => {
                if is_file(&entry) && has_relevant_extension(entry.path(), config) {
                    Some(entry.into_path())
                } else {
                    None
                }
            }
            Err(e) => {
                tracing::warn!("Could not read directory entry: {e}");
                None
            }
        }
    })
}

fn is_pruned(
    entry: &DirEntry,
    filter: &Filter,
) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_dir())
        && filter.is_ignored_directory(&entry.file_name().to_string_lossy())
}

fn is_file(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => entry.path().is_file(),
        _ => false,
    }
}

fn has_relevant_extension(
    path: &Path,
    config: &Config,
) -> bool {
    path.extension()
        .map(|ext| config.is_relevant_extension(&ext.to_string_lossy()))
        .unwrap_or(false)
}
