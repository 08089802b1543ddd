mod mock_book_repository;

#[allow(unused_imports)]
pub use mock_book_repository::MockBookRepository;
