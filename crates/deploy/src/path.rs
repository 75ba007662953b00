use sitedeploy_protocol::ARCHIVE_JUNK_MARKER;

/// Normalizes a record path to the absolute form the store expects.
pub fn normalize_store_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Returns `true` for paths pointing at archive metadata artifacts.
///
/// Checked again at the transfer boundary even though the extractor is
/// expected to have removed them, so an upstream sanitizer regression
/// cannot leak junk into the store.
pub fn is_archive_junk(path: &str) -> bool {
    path.contains(ARCHIVE_JUNK_MARKER)
}
