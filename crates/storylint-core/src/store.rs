//! Story file I/O: load the document, write the sanitized copy.
//!
//! Both fatal conditions live here: a missing input and an input that does
//! not parse as a JSON array of scenes. Either stops the run before any
//! output path is touched. Writes go through a temp file and rename so a
//! failed run never leaves a partial output behind.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::scene::Scene;

/// Errors from loading or writing a story file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The input path does not resolve to an existing file.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// The input is not a JSON array of scenes. Carries the parser's
    /// diagnostic.
    #[error("failed to parse JSON: {0}")]
    Parse(String),

    /// Filesystem failure while reading or writing.
    #[error("io error: {0}")]
    Io(String),
}

/// Load a story document from `path`.
pub fn load_story(path: impl AsRef<Path>) -> Result<Vec<Scene>, StoreError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(StoreError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)
        .map_err(|e| StoreError::Io(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&text).map_err(|e| StoreError::Parse(e.to_string()))
}

/// Write a story document to `path`: pretty-printed, UTF-8, non-ASCII
/// characters emitted literally. Atomic via temp file + rename.
pub fn write_story(path: impl AsRef<Path>, scenes: &[Scene]) -> Result<(), StoreError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| StoreError::Io(format!("{parent:?}: {e}")))?;
    }

    let tmp_path = tmp_write_path(path);
    let write_result = (|| -> Result<(), StoreError> {
        let file = File::create(&tmp_path)
            .map_err(|e| StoreError::Io(format!("{}: {e}", tmp_path.display())))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, scenes)
            .map_err(|e| StoreError::Io(format!("{}: {e}", tmp_path.display())))?;
        writeln!(writer).map_err(|e| StoreError::Io(format!("{}: {e}", tmp_path.display())))?;
        writer
            .flush()
            .map_err(|e| StoreError::Io(format!("{}: {e}", tmp_path.display())))?;
        Ok(())
    })();

    if let Err(error) = write_result {
        let _ = fs::remove_file(&tmp_path);
        return Err(error);
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        StoreError::Io(format!(
            "{} -> {}: {e}",
            tmp_path.display(),
            path.display()
        ))
    })
}

/// Default output path: the input path with its extension replaced by
/// `.sanitized.json` (`story.json` becomes `story.sanitized.json`).
pub fn default_output_path(input: impl AsRef<Path>) -> PathBuf {
    input.as_ref().with_extension("sanitized.json")
}

fn tmp_write_path(path: &Path) -> PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let mut tmp: OsString = path.as_os_str().to_os_string();
    tmp.push(format!(".tmp.{}.{}", std::process::id(), unique));
    PathBuf::from(tmp)
}
