use async_trait::async_trait;

use folio_core::AppResult;
use folio_domain::{
    Author, AuthorId, AuthorProfile, Book, BookId, BookProfile, Publisher, PublisherId,
    PublisherProfile,
};

/// Repository port for authors.
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Stores a new author. Returns `Conflict` when the email is taken.
    async fn create(&self, profile: AuthorProfile) -> AppResult<Author>;

    /// Lists all authors ordered by id.
    async fn list(&self) -> AppResult<Vec<Author>>;

    /// Returns one author by id.
    async fn find(&self, author_id: AuthorId) -> AppResult<Option<Author>>;

    /// Overwrites an existing author. Returns `NotFound` when absent.
    async fn update(&self, author: Author) -> AppResult<Author>;

    /// Deletes an author and every book referencing it. Returns whether a
    /// row was removed.
    async fn delete(&self, author_id: AuthorId) -> AppResult<bool>;
}

/// Repository port for publishers.
#[async_trait]
pub trait PublisherRepository: Send + Sync {
    /// Stores a new publisher.
    async fn create(&self, profile: PublisherProfile) -> AppResult<Publisher>;

    /// Lists all publishers ordered by id.
    async fn list(&self) -> AppResult<Vec<Publisher>>;

    /// Returns one publisher by id.
    async fn find(&self, publisher_id: PublisherId) -> AppResult<Option<Publisher>>;

    /// Overwrites an existing publisher. Returns `NotFound` when absent.
    async fn update(&self, publisher: Publisher) -> AppResult<Publisher>;

    /// Deletes a publisher and every book referencing it.
    async fn delete(&self, publisher_id: PublisherId) -> AppResult<bool>;
}

/// Repository port for books.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Stores a new book. Returns `Conflict` when the ISBN is taken.
    async fn create(&self, profile: BookProfile) -> AppResult<Book>;

    /// Lists all books ordered by id.
    async fn list(&self) -> AppResult<Vec<Book>>;

    /// Returns one book by id.
    async fn find(&self, book_id: BookId) -> AppResult<Option<Book>>;

    /// Overwrites an existing book. Returns `NotFound` when absent.
    async fn update(&self, book: Book) -> AppResult<Book>;

    /// Deletes one book.
    async fn delete(&self, book_id: BookId) -> AppResult<bool>;
}
