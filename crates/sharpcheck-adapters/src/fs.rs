//! Filesystem scanning and the upload extension allowlist.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sharpcheck_core::{ImageDecoder, PixelBuffer};
use tracing::warn;

use crate::decode::CodecDecoder;

/// File extensions accepted for analysis, case-insensitive.
///
/// This mirrors the upload allowlist of the HTTP layer; the core itself only
/// requires a valid decoded pixel buffer regardless of original encoding.
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Checks whether a file name carries an allowed image extension.
#[must_use]
pub fn has_allowed_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .is_some_and(|e| ALLOWED_EXTENSIONS.contains(&e.as_str()))
}

/// Collects analyzable image files from the given paths.
///
/// Files are accepted when they pass the extension allowlist; directories
/// are scanned, recursing when `recursive` is set. Unreadable directories
/// and unsupported files are logged and skipped, never fatal.
#[must_use]
pub fn collect_image_files(paths: &[PathBuf], recursive: bool) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            if has_allowed_extension(path) {
                files.push(path.clone());
            } else {
                warn!("Unsupported file type: {}", path.display());
            }
        } else if path.is_dir() {
            collect_from_dir(path, recursive, &mut files);
        } else {
            warn!("Path does not exist: {}", path.display());
        }
    }

    files
}

fn collect_from_dir(dir: &Path, recursive: bool, files: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            warn!("Failed to read directory {}: {e}", dir.display());
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_file() && has_allowed_extension(&path) {
            files.push(path);
        } else if path.is_dir() && recursive {
            collect_from_dir(&path, recursive, files);
        }
    }
}

/// Reads a file from disk and decodes it into a pixel buffer.
///
/// # Errors
///
/// Returns an error with path context when the file cannot be read or its
/// bytes cannot be decoded.
pub fn load_pixels(path: &Path) -> Result<PixelBuffer> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    CodecDecoder::new()
        .decode(&bytes)
        .with_context(|| format!("failed to decode {}", path.display()))
}
