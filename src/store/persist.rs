//! Backing file persistence
//!
//! The data file is a JSON array of jokes. Loading happens once at boot;
//! saving is an explicit snapshot, never automatic per write.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::errors::{PersistError, PersistResult};
use super::joke::{Joke, RawJoke};

/// Read every record from the data file
pub fn load_jokes(path: &Path) -> PersistResult<Vec<RawJoke>> {
    let content =
        fs::read_to_string(path).map_err(|e| PersistError::io("Failed to read", path, e))?;
    serde_json::from_str(&content).map_err(|source| PersistError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `jokes` to `path` as pretty-printed JSON.
///
/// The content goes to a sibling temp file first and is renamed into place.
pub fn save_jokes(path: &Path, jokes: &[Joke]) -> PersistResult<()> {
    let json = serde_json::to_string_pretty(jokes)?;
    write_replace(path, json.as_bytes())
}

/// Give every element of the file `id = position + 1`, keeping all other fields.
///
/// Returns the number of records rewritten.
pub fn assign_ids(path: &Path) -> PersistResult<usize> {
    let content =
        fs::read_to_string(path).map_err(|e| PersistError::io("Failed to read", path, e))?;
    let mut records: Vec<Value> =
        serde_json::from_str(&content).map_err(|source| PersistError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    for (position, record) in records.iter_mut().enumerate() {
        if let Value::Object(fields) = record {
            fields.insert("id".to_string(), Value::from(position as u64 + 1));
        }
    }

    let json = serde_json::to_string_pretty(&records)?;
    write_replace(path, json.as_bytes())?;
    Ok(records.len())
}

/// Write through a sibling temp file. The temp file never outlives a
/// failed write.
fn write_replace(path: &Path, bytes: &[u8]) -> PersistResult<()> {
    let tmp = temp_path(path);

    let mut file =
        File::create(&tmp).map_err(|e| PersistError::io("Failed to create", &tmp, e))?;

    let result = file
        .write_all(bytes)
        .map_err(|e| PersistError::io("Failed to write", &tmp, e))
        .and_then(|()| {
            file.sync_all()
                .map_err(|e| PersistError::io("Failed to fsync", &tmp, e))
        })
        .and_then(|()| {
            fs::rename(&tmp, path).map_err(|e| PersistError::io("Failed to replace", path, e))
        });

    if result.is_err() {
        drop(file);
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
