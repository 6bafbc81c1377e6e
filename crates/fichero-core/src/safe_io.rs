//! Atomic file writes.
//!
//! A new record is written to a `.tmp` sibling, synced, then renamed into
//! place, so a crash mid-write leaves either the complete file or nothing.

use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Atomically write `contents` to `path` (temp file + fsync + rename).
///
/// On Unix the rename is atomic within the same filesystem. The target is
/// either fully written or unchanged.
pub fn atomic_write_text(path: &Path, contents: &str) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&tmp_path)?;
    {
        let mut writer = BufWriter::new(&mut file);
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
    }

    // Sync to disk before rename
    file.sync_all()?;

    fs::rename(&tmp_path, path)
}
