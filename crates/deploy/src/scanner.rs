//! Bundle scanning.
//!
//! Recursively walks an extracted bundle directory and produces the file
//! records the transfer pipeline consumes, with relative paths normalized
//! to forward slashes.

use std::path::Path;

use sitedeploy_protocol::FileRecord;

use crate::error::DeployError;

/// Scans an extracted bundle directory into file records.
///
/// Relative paths use `/` as separator (even on Windows) to match the
/// store's path scheme. Content is loaded as opaque bytes; nothing is
/// re-encoded. Returns the records and the total content size in bytes.
pub fn scan_bundle(root: &Path) -> Result<(Vec<FileRecord>, u64), DeployError> {
    let mut files = Vec::new();
    let mut total_size: u64 = 0;

    walk_dir(root, root, &mut files, &mut total_size)?;

    Ok((files, total_size))
}

fn walk_dir(
    root: &Path,
    current: &Path,
    files: &mut Vec<FileRecord>,
    total_size: &mut u64,
) -> Result<(), DeployError> {
    let entries = std::fs::read_dir(current)?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        let metadata = entry.metadata()?;

        if metadata.is_dir() {
            walk_dir(root, &path, files, total_size)?;
        } else if metadata.is_file() {
            let rel_path = path.strip_prefix(root).map_err(std::io::Error::other)?;

            // Normalize to forward slashes.
            let rel_str = rel_path.to_string_lossy().replace('\\', "/");
            let content = std::fs::read(&path)?;
            *total_size += content.len() as u64;

            files.push(FileRecord {
                content_type: content_type_for(&rel_str).to_string(),
                path: rel_str,
                content_encoding: None,
                content,
            });
        }
    }

    Ok(())
}

/// Maps a file extension to the content type sent to the store.
///
/// Static site bundles are overwhelmingly made of a handful of types;
/// anything unknown ships as `application/octet-stream`.
pub fn content_type_for(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" | "mjs" => "text/javascript",
        "json" => "application/json",
        "xml" => "application/xml",
        "txt" => "text/plain",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "ico" => "image/x-icon",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",
        "wasm" => "application/wasm",
        "pdf" => "application/pdf",
        "webmanifest" => "application/manifest+json",
        _ => "application/octet-stream",
    }
}
