//! Unpacking of the generator's SQLite process database.
//!
//! The generator can pack its per-subprocess descriptor files into a
//! single-table blob store with columns `(path, content)`. Each row is
//! materialized as a loose file named by the last path segment, written
//! verbatim into a scratch directory. The directory is removed when the
//! returned handle is dropped, after the descriptors have been consumed.

use std::path::Path;

use anyhow::{bail, Context, Result};
use rusqlite::types::ValueRef;
use rusqlite::Connection;
use tempfile::TempDir;
use tracing::debug;

/// Materialize every row of the process database into a scratch directory.
pub fn unpack_process_db(db_path: &Path) -> Result<TempDir> {
    let dir = TempDir::new().context("failed to create scratch directory")?;
    let conn = Connection::open(db_path)
        .with_context(|| format!("failed to open process database {}", db_path.display()))?;

    let mut stmt = conn
        .prepare("SELECT path, content FROM path")
        .context("process database has no path table")?;
    let mut rows = stmt.query([])?;

    let mut count = 0usize;
    while let Some(row) = rows.next()? {
        let path: String = row.get(0)?;
        // The content column holds text in older databases and blobs in
        // newer ones; both are written out byte for byte.
        let content: Vec<u8> = match row.get_ref(1)? {
            ValueRef::Text(bytes) | ValueRef::Blob(bytes) => bytes.to_vec(),
            ValueRef::Null => Vec::new(),
            other => bail!("unexpected content column type: {}", other.data_type()),
        };

        let name = path.rsplit('/').next().unwrap_or(&path);
        std::fs::write(dir.path().join(name), &content)
            .with_context(|| format!("failed to unpack {}", name))?;
        count += 1;
    }

    debug!(
        files = count,
        dir = %dir.path().display(),
        "unpacked process database"
    );
    Ok(dir)
}
