pub mod mock_book_storage;

#[allow(unused_imports)]
pub use mock_book_storage::MockBookStorage;
