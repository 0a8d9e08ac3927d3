use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use summoners_book::error::{StorageError, StorageResult};
use summoners_book::storage::BookStorage;
use summoners_book::SummonersBook;

/// In-memory book storage for testing.
///
/// Books are kept per path. A path can be marked as failing, in which case
/// every save to it returns an I/O error and leaves the stored book alone.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockBookStorage {
    file_path: PathBuf,
    books: Arc<Mutex<HashMap<PathBuf, SummonersBook>>>,
    failing_saves: Arc<Mutex<Vec<PathBuf>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockBookStorage {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            books: Arc::new(Mutex::new(HashMap::new())),
            failing_saves: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Put `book` at the default path, as if it had been saved earlier.
    pub fn seed(&self, book: SummonersBook) {
        let mut books = self.books.lock().unwrap();
        books.insert(self.file_path.clone(), book);
    }

    pub fn fail_saves_to(&self, path: impl Into<PathBuf>) {
        let mut failing = self.failing_saves.lock().unwrap();
        failing.push(path.into());
    }

    pub fn stored(&self, path: &Path) -> Option<SummonersBook> {
        let books = self.books.lock().unwrap();
        books.get(path).cloned()
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn check_save_failing(&self, path: &Path) -> StorageResult<()> {
        let failing = self.failing_saves.lock().unwrap();
        if failing.iter().any(|p| p == path) {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "mock failure"),
            });
        }
        Ok(())
    }
}

impl BookStorage for MockBookStorage {
    fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn read_book_from(&self, path: &Path) -> StorageResult<Option<SummonersBook>> {
        self.track_call("read_book_from");
        Ok(self.stored(path))
    }

    fn save_book_to(&self, book: &SummonersBook, path: &Path) -> StorageResult<()> {
        self.track_call("save_book_to");
        self.check_save_failing(path)?;
        let mut books = self.books.lock().unwrap();
        books.insert(path.to_path_buf(), book.clone());
        Ok(())
    }
}
