//! Persistence of the summoners book.
//!
//! - [`PlayerRecord`]: a player as plain JSON values (the serialization adapter)
//! - [`BookFile`]: the whole document, `{ "players": [...] }`
//! - [`BookStorage`]: the storage seam, implemented by [`JsonBookStorage`]

mod book_file;
mod json_storage;
mod record;
mod traits;

pub use book_file::{file_schema, BookFile};
pub use json_storage::JsonBookStorage;
pub use record::{PlayerRecord, RECORD_KEYS};
pub use traits::BookStorage;
