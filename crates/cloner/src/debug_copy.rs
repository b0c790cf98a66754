//! A local, human-readable copy of the profile that is about to be created.

use arrclone_arr_api::models::NewQualityProfile;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DebugCopyError {
    #[error("could not serialize the quality profile: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write `profile` to `path` as pretty-printed JSON, replacing any existing file.
pub fn persist_debug_copy(profile: &NewQualityProfile, path: &Path) -> Result<(), DebugCopyError> {
    let json = serde_json::to_string_pretty(profile)?;
    let to_write_error = |source| DebugCopyError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(json.as_bytes()).map_err(to_write_error)?;
    writer.write_all(b"\n").map_err(to_write_error)?;
    writer.flush().map_err(to_write_error)
}
