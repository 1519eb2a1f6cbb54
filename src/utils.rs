// ABOUTME: Utility functions for the deck-outline application
// ABOUTME: Input discovery and path validation helpers for the CLI

use crate::errors::{DeckError, Result};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Validate that a file exists
pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DeckError::PathNotFoundError(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(DeckError::ValidationError(format!(
            "Path is not a file: {:?}",
            path
        )));
    }
    Ok(())
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(DeckError::FileReadError)?;
    } else if !path.is_dir() {
        return Err(DeckError::ValidationError(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Resolve an input argument to markdown files.
///
/// An existing file path is returned as is; anything else is treated as a
/// glob pattern whose matching files are returned sorted.
pub fn resolve_inputs(input: &str) -> Result<Vec<PathBuf>> {
    let direct = Path::new(input);
    if direct.is_file() {
        return Ok(vec![direct.to_path_buf()]);
    }

    let mut paths = Vec::new();
    for entry in glob::glob(input)? {
        match entry {
            Ok(path) if path.is_file() => paths.push(path),
            Ok(path) => debug!("Skipping non-file match {:?}", path),
            Err(e) => warn!("Unreadable glob match: {}", e),
        }
    }

    paths.sort();

    if paths.is_empty() {
        return Err(DeckError::NoInputFoundError(input.to_string()));
    }

    Ok(paths)
}

/// Output path for one input when writing into a directory.
pub fn output_path_for(input: &Path, output_dir: &Path, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "deck".to_string());
    output_dir.join(format!("{}.{}", stem, extension))
}
