//! Whole-file JSON persistence with file locking.
//!
//! Both the study plan and the verse cache are small documents rewritten in
//! full on every change. Reads take a shared lock; writes go through a locked
//! temp file in the same directory that is atomically renamed over the target.

use crate::{Error, Result};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Read a JSON document with shared locking
///
/// Returns `None` if the file doesn't exist or can't be read or parsed.
/// Failures are logged as warnings; the caller picks the fallback value.
pub fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Option<T> {
    if !path.exists() {
        tracing::info!("No {} file found at {:?}", what, path);
        return None;
    }

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            tracing::warn!("Unable to open {} file {:?}: {}", what, path, e);
            return None;
        }
    };

    if let Err(e) = file.lock_shared() {
        tracing::warn!("Unable to lock {} file {:?}: {}", what, path, e);
        return None;
    }

    let mut contents = String::new();
    let mut reader = std::io::BufReader::new(&file);
    let read = reader.read_to_string(&mut contents);
    let _ = file.unlock();
    if let Err(e) = read {
        tracing::warn!("Failed to read {} file {:?}: {}", what, path, e);
        return None;
    }

    match serde_json::from_str::<T>(&contents) {
        Ok(value) => {
            tracing::debug!("Loaded {} from {:?}", what, path);
            Some(value)
        }
        Err(e) => {
            tracing::warn!("Failed to parse {} file {:?}: {}", what, path, e);
            None
        }
    }
}

/// Write a JSON document atomically with exclusive locking
///
/// 1. Write pretty-printed JSON to a temp file next to `path`
/// 2. Sync to disk
/// 3. Rename over the target file
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent)?;

    let temp = NamedTempFile::new_in(parent)?;
    temp.as_file().lock_exclusive()?;

    {
        let mut writer = std::io::BufWriter::new(temp.as_file());
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }

    temp.as_file().sync_all()?;
    temp.as_file().unlock()?;

    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::debug!("Wrote {:?}", path);
    Ok(())
}
