//! Listing of the files a build produced.

use std::path::Path;

use futures::future::join_all;

use crate::error::{Error, Result};
use crate::size::{UNKNOWN_SIZE, format_size};

/// One file in the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub name: String,
    pub size: String,
}

/// List `dist` and size every entry.
///
/// The per-file stats run concurrently; the result is sorted by filename.
/// A file whose size cannot be read is reported as `"Unknown"`.
pub async fn collect_summary(dist: impl AsRef<Path>) -> Result<Vec<SummaryEntry>> {
    let dist = dist.as_ref();
    let mut entries = tokio::fs::read_dir(dist).await.map_err(|e| Error::io(dist, e))?;

    let mut paths = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(|e| Error::io(dist, e))? {
        paths.push(entry.path());
    }

    let mut summary = join_all(paths.into_iter().map(|path| async move {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let size = match tokio::fs::metadata(&path).await {
            Ok(meta) => format_size(meta.len()),
            Err(_) => UNKNOWN_SIZE.to_string(),
        };
        SummaryEntry { name, size }
    }))
    .await;

    summary.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(summary)
}
