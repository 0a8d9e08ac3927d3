//! Book storage backed by a single JSON file.

use crate::error::{DataLoadCause, StorageError, StorageResult};
use crate::registry::SummonersBook;
use crate::storage::{BookFile, BookStorage};
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Stores the whole book as one JSON document on disk.
///
/// Writes go to a temporary sibling file which is synced and then renamed
/// over the target, so the previous file survives a failed save.
#[derive(Debug, Clone)]
pub struct JsonBookStorage {
    file_path: PathBuf,
}

impl JsonBookStorage {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl BookStorage for JsonBookStorage {
    fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn read_book_from(&self, path: &Path) -> StorageResult<Option<SummonersBook>> {
        debug!(path = %path.display(), "Attempting to read data from file");

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Data file not found");
                return Ok(None);
            }
            Err(e) => return Err(io_error(path, e)),
        };

        let book = BookFile::from_json_slice(&bytes)
            .and_then(BookFile::into_book)
            .map_err(|cause| {
                if matches!(cause, DataLoadCause::Format(_) | DataLoadCause::Duplicate(_)) {
                    info!(path = %path.display(), "Illegal values found: {}", cause);
                } else {
                    warn!(path = %path.display(), "Data file is not in the correct format: {}", cause);
                }
                StorageError::DataLoad {
                    path: path.to_path_buf(),
                    source: cause,
                }
            })?;

        debug!(path = %path.display(), players = book.len(), "Loaded book");
        Ok(Some(book))
    }

    fn save_book_to(&self, book: &SummonersBook, path: &Path) -> StorageResult<()> {
        debug!(path = %path.display(), players = book.len(), "Attempting to write to data file");

        let json = BookFile::from_book(book)
            .to_json_pretty()
            .map_err(|e| io_error(path, e.into()))?;
        write_atomic_file(path, json.as_bytes()).map_err(|e| io_error(path, e))
    }
}

fn io_error(path: &Path, source: io::Error) -> StorageError {
    StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Write `bytes` to a temp file next to `path`, sync, then rename over `path`.
fn write_atomic_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    let mut tmp_name = OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(format!(".tmp.{}", std::process::id()));
    let tmp = parent.join(tmp_name);

    let written = (|| -> io::Result<()> {
        let mut f = fs::File::create(&tmp)?;
        f.write_all(bytes)?;
        f.write_all(b"\n")?;
        f.sync_all()?;
        fs::rename(&tmp, path)
    })();

    if written.is_err() {
        let _ = fs::remove_file(&tmp);
        return written;
    }

    if let Ok(dir) = fs::File::open(&parent) {
        let _ = dir.sync_all();
    }
    Ok(())
}
