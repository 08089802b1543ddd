use crate::book::AddressBook;
use crate::error::StorageResult;

/// Repository for persisting the whole address book.
///
/// Provides abstraction over snapshot storage, enabling different
/// implementations (JSON file, in-memory mock).
pub trait BookRepository {
    /// Load the stored address book.
    ///
    /// Returns an empty book when nothing has been stored yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored snapshot with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
