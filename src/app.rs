// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod rewrite;
pub mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{self, Path};

use self::cli::Cli;
use self::config::resolve_config;
use self::error::RewriteError;
use self::models::RuntimeConfig;
use self::rewrite::rewrite_file;
use self::scanner::{is_writable, Scanner};

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Resolve Configuration
    let config = resolve_config(args)?;

    // 3. Rewrite
    execute(&config)
}

/// Resolves the target path and rewrites one file or a directory tree.
pub fn execute(config: &RuntimeConfig) -> Result<()> {
    let target = config.target.as_path();

    if !target.exists() {
        return Err(RewriteError::PathNotFound(target.to_path_buf()).into());
    }

    if config.recursive {
        rewrite_tree(target, config)
    } else {
        rewrite_single(target, config)
    }
}

/// Walks the tree and rewrites every matching file, stopping at the first
/// failure.
fn rewrite_tree(root: &Path, config: &RuntimeConfig) -> Result<()> {
    if !root.is_dir() {
        return Err(RewriteError::NotADirectory(root.to_path_buf()).into());
    }

    let scanner = Scanner::new(root.to_path_buf(), config)?;
    for file in scanner.files() {
        rewrite_file(&file, config)?;
    }

    Ok(())
}

fn rewrite_single(target: &Path, config: &RuntimeConfig) -> Result<()> {
    if !target.is_file() {
        return Err(RewriteError::NotAFile(target.to_path_buf()).into());
    }

    // A temporary sibling will be created next to the file, so the parent
    // directory must be writable before anything is touched.
    let absolute = path::absolute(target).map_err(|source| RewriteError::Io {
        op: "resolve",
        path: target.to_path_buf(),
        source,
    })?;
    let parent = absolute.parent().context("Target has no parent directory")?;
    if !is_writable(parent) {
        return Err(RewriteError::Permission(parent.to_path_buf()).into());
    }

    rewrite_file(target, config)?;
    Ok(())
}
