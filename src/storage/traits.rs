use crate::error::StorageResult;
use crate::registry::SummonersBook;
use std::path::Path;

/// Persistence for a summoners book.
///
/// Provides abstraction over where and how the book is stored, enabling
/// different implementations (JSON file, in-memory mock).
pub trait BookStorage {
    /// Location used by `read_book` and `save_book`.
    fn file_path(&self) -> &Path;

    /// Read the book stored at `path`.
    ///
    /// Returns `Ok(None)` if nothing is stored there yet. Any other problem
    /// fails the whole read; a partially read book is never returned.
    fn read_book_from(&self, path: &Path) -> StorageResult<Option<SummonersBook>>;

    /// Replace whatever is stored at `path` with `book`.
    fn save_book_to(&self, book: &SummonersBook, path: &Path) -> StorageResult<()>;

    /// Read the book stored at [`BookStorage::file_path`].
    fn read_book(&self) -> StorageResult<Option<SummonersBook>> {
        self.read_book_from(self.file_path())
    }

    /// Save the book to [`BookStorage::file_path`].
    fn save_book(&self, book: &SummonersBook) -> StorageResult<()> {
        self.save_book_to(book, self.file_path())
    }
}
