use crate::app::models::RuntimeConfig;
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use pathdiff::diff_paths;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Walks a directory tree and yields the files selected for rewriting.
pub struct Scanner {
    root: PathBuf,
    target_set: GlobSet,
}

impl Scanner {
    pub fn new(root: PathBuf, config: &RuntimeConfig) -> Result<Self> {
        Ok(Self {
            root,
            target_set: extension_globset(&config.extension)?,
        })
    }

    /// Lazily yields matching files in walk order, to unbounded depth.
    ///
    /// A directory without write access is reported and the files directly
    /// inside it are skipped, but the walk still descends into its
    /// subdirectories: write access is checked per directory, not inherited.
    pub fn files(&self) -> impl Iterator<Item = PathBuf> + '_ {
        // Every entry is visited; none of the usual hidden/gitignore
        // filtering applies here.
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .build();

        let mut unwritable: HashSet<PathBuf> = HashSet::new();

        walker.filter_map(move |result| {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("Error walking entry: {}", err);
                    return None;
                }
            };

            let path = entry.path();
            let is_dir = entry.file_type().map_or(false, |t| t.is_dir());

            if is_dir {
                // Rewrites create a temporary sibling next to each file, so
                // the containing directory itself must be writable.
                if !is_writable(path) {
                    log::warn!("No rights for write on '{}'", path.display());
                    unwritable.insert(path.to_path_buf());
                }
                return None;
            }

            if path.parent().is_some_and(|dir| unwritable.contains(dir)) {
                return None;
            }

            self.matches(path).then(|| path.to_path_buf())
        })
    }

    fn matches(&self, path: &Path) -> bool {
        match diff_paths(path, &self.root) {
            Some(relative) => self.target_set.is_match(&relative),
            None => false,
        }
    }
}

/// Builds the `*.<ext>` matcher used to select files during the walk.
fn extension_globset(extension: &str) -> Result<GlobSet> {
    let pattern = format!("*.{}", extension);
    let mut builder = GlobSetBuilder::new();
    builder.add(Glob::new(&pattern).context(format!("Invalid file pattern: {}", pattern))?);
    Ok(builder.build()?)
}

pub fn is_writable(path: &Path) -> bool {
    fs::metadata(path).map_or(false, |meta| !meta.permissions().readonly())
}
