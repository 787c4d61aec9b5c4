//! Process-local catalog repository.
//!
//! One value backs the author, publisher and book ports so deletes can
//! cascade the way the relational schema does.

use std::collections::BTreeMap;

use async_trait::async_trait;
use folio_application::{AuthorRepository, BookRepository, PublisherRepository};
use folio_core::{AppError, AppResult};
use folio_domain::{
    Author, AuthorId, AuthorProfile, Book, BookId, BookProfile, Publisher, PublisherId,
    PublisherProfile,
};
use tokio::sync::RwLock;

#[derive(Default)]
struct CatalogTables {
    last_author_id: i64,
    last_publisher_id: i64,
    last_book_id: i64,
    authors: BTreeMap<AuthorId, Author>,
    publishers: BTreeMap<PublisherId, Publisher>,
    books: BTreeMap<BookId, Book>,
}

impl CatalogTables {
    fn ensure_author_email_free(&self, email: &str, except: Option<AuthorId>) -> AppResult<()> {
        let taken = self
            .authors
            .values()
            .any(|author| Some(author.id()) != except && author.profile().email() == email);
        if taken {
            return Err(AppError::Conflict(
                "author with this email already exists.".to_owned(),
            ));
        }

        Ok(())
    }

    fn ensure_isbn_free(&self, isbn: &str, except: Option<BookId>) -> AppResult<()> {
        let taken = self
            .books
            .values()
            .any(|book| Some(book.id()) != except && book.profile().isbn() == isbn);
        if taken {
            return Err(AppError::Conflict(
                "book with this isbn already exists.".to_owned(),
            ));
        }

        Ok(())
    }
}

/// In-memory implementation of the catalog repository ports.
#[derive(Default)]
pub struct InMemoryCatalogRepository {
    tables: RwLock<CatalogTables>,
}

impl InMemoryCatalogRepository {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuthorRepository for InMemoryCatalogRepository {
    async fn create(&self, profile: AuthorProfile) -> AppResult<Author> {
        let mut tables = self.tables.write().await;
        tables.ensure_author_email_free(profile.email(), None)?;

        tables.last_author_id += 1;
        let author = Author::new(AuthorId::new(tables.last_author_id), profile);
        tables.authors.insert(author.id(), author.clone());
        Ok(author)
    }

    async fn list(&self) -> AppResult<Vec<Author>> {
        Ok(self.tables.read().await.authors.values().cloned().collect())
    }

    async fn find(&self, author_id: AuthorId) -> AppResult<Option<Author>> {
        Ok(self.tables.read().await.authors.get(&author_id).cloned())
    }

    async fn update(&self, author: Author) -> AppResult<Author> {
        let mut tables = self.tables.write().await;
        if !tables.authors.contains_key(&author.id()) {
            return Err(AppError::NotFound(format!(
                "author {} does not exist",
                author.id().as_i64()
            )));
        }
        tables.ensure_author_email_free(author.profile().email(), Some(author.id()))?;

        tables.authors.insert(author.id(), author.clone());
        Ok(author)
    }

    async fn delete(&self, author_id: AuthorId) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.authors.remove(&author_id).is_none() {
            return Ok(false);
        }

        tables
            .books
            .retain(|_, book| book.profile().author_id() != author_id);
        Ok(true)
    }
}

#[async_trait]
impl PublisherRepository for InMemoryCatalogRepository {
    async fn create(&self, profile: PublisherProfile) -> AppResult<Publisher> {
        let mut tables = self.tables.write().await;
        tables.last_publisher_id += 1;
        let publisher = Publisher::new(PublisherId::new(tables.last_publisher_id), profile);
        tables.publishers.insert(publisher.id(), publisher.clone());
        Ok(publisher)
    }

    async fn list(&self) -> AppResult<Vec<Publisher>> {
        Ok(self
            .tables
            .read()
            .await
            .publishers
            .values()
            .cloned()
            .collect())
    }

    async fn find(&self, publisher_id: PublisherId) -> AppResult<Option<Publisher>> {
        Ok(self.tables.read().await.publishers.get(&publisher_id).cloned())
    }

    async fn update(&self, publisher: Publisher) -> AppResult<Publisher> {
        let mut tables = self.tables.write().await;
        match tables.publishers.get_mut(&publisher.id()) {
            Some(slot) => {
                *slot = publisher.clone();
                Ok(publisher)
            }
            None => Err(AppError::NotFound(format!(
                "publisher {} does not exist",
                publisher.id().as_i64()
            ))),
        }
    }

    async fn delete(&self, publisher_id: PublisherId) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.publishers.remove(&publisher_id).is_none() {
            return Ok(false);
        }

        tables
            .books
            .retain(|_, book| book.profile().publisher_id() != publisher_id);
        Ok(true)
    }
}

#[async_trait]
impl BookRepository for InMemoryCatalogRepository {
    async fn create(&self, profile: BookProfile) -> AppResult<Book> {
        let mut tables = self.tables.write().await;
        tables.ensure_isbn_free(profile.isbn(), None)?;

        tables.last_book_id += 1;
        let book = Book::new(BookId::new(tables.last_book_id), profile);
        tables.books.insert(book.id(), book.clone());
        Ok(book)
    }

    async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.tables.read().await.books.values().cloned().collect())
    }

    async fn find(&self, book_id: BookId) -> AppResult<Option<Book>> {
        Ok(self.tables.read().await.books.get(&book_id).cloned())
    }

    async fn update(&self, book: Book) -> AppResult<Book> {
        let mut tables = self.tables.write().await;
        if !tables.books.contains_key(&book.id()) {
            return Err(AppError::NotFound(format!(
                "book {} does not exist",
                book.id().as_i64()
            )));
        }
        tables.ensure_isbn_free(book.profile().isbn(), Some(book.id()))?;

        tables.books.insert(book.id(), book.clone());
        Ok(book)
    }

    async fn delete(&self, book_id: BookId) -> AppResult<bool> {
        Ok(self.tables.write().await.books.remove(&book_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use folio_application::{AuthorRepository, BookRepository, PublisherRepository};
    use folio_core::{AppError, AppResult};
    use folio_domain::{AuthorProfile, BookProfile, PublisherProfile};

    use super::InMemoryCatalogRepository;

    fn date(year: i32, month: u32, day: u32) -> AppResult<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| AppError::Validation("invalid test date".to_owned()))
    }

    fn author(email: &str) -> AppResult<AuthorProfile> {
        AuthorProfile::new("Octavia Butler", date(1947, 6, 22)?, "American", "Kindred.", email)
    }

    fn publisher() -> AppResult<PublisherProfile> {
        PublisherProfile::new(
            "Beacon",
            "25 Beacon Street",
            "https://beacon.example",
            "info@beacon.example",
            1854,
        )
    }

    #[tokio::test]
    async fn author_email_is_unique_across_updates() -> AppResult<()> {
        let repository = InMemoryCatalogRepository::new();
        AuthorRepository::create(&repository, author("one@example.com")?).await?;
        let second = AuthorRepository::create(&repository, author("two@example.com")?).await?;

        let renamed = folio_domain::Author::new(second.id(), author("one@example.com")?);
        let result = AuthorRepository::update(&repository, renamed).await;
        let unchanged = folio_domain::Author::new(second.id(), author("two@example.com")?);

        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert!(AuthorRepository::update(&repository, unchanged).await.is_ok());
        Ok(())
    }

    #[tokio::test]
    async fn deleting_author_cascades_only_their_books() -> AppResult<()> {
        let repository = InMemoryCatalogRepository::new();
        let kept_author = AuthorRepository::create(&repository, author("one@example.com")?).await?;
        let removed_author =
            AuthorRepository::create(&repository, author("two@example.com")?).await?;
        let publisher = PublisherRepository::create(&repository, publisher()?).await?;

        let kept = BookRepository::create(
            &repository,
            BookProfile::new(
                "Kindred",
                kept_author.id(),
                publisher.id(),
                date(1979, 6, 1)?,
                "9780807083697",
                "Time travel.",
            )?,
        )
        .await?;
        BookRepository::create(
            &repository,
            BookProfile::new(
                "Dawn",
                removed_author.id(),
                publisher.id(),
                date(1987, 5, 1)?,
                "0446603775",
                "First contact.",
            )?,
        )
        .await?;

        assert!(AuthorRepository::delete(&repository, removed_author.id()).await?);

        let remaining = BookRepository::list(&repository).await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id(), kept.id());
        assert!(!AuthorRepository::delete(&repository, removed_author.id()).await?);
        Ok(())
    }
}
