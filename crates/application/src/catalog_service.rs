//! Catalog application service: authors, publishers and books.

use std::sync::Arc;

use folio_core::{AppError, AppResult};
use folio_domain::{
    Author, AuthorId, Book, BookId, BookProfile, Publisher, PublisherId,
};
use tracing::info;

use crate::catalog_ports::{
    AuthorInput, AuthorPatch, AuthorRepository, BookInput, BookPatch, BookRepository,
    PublisherInput, PublisherPatch, PublisherRepository,
};

mod authors;
mod books;
mod publishers;


/// Application service for catalog CRUD operations.
#[derive(Clone)]
pub struct CatalogService {
    author_repository: Arc<dyn AuthorRepository>,
    publisher_repository: Arc<dyn PublisherRepository>,
    book_repository: Arc<dyn BookRepository>,
}

impl CatalogService {
    /// Creates a new catalog service.
    #[must_use]
    pub fn new(
        author_repository: Arc<dyn AuthorRepository>,
        publisher_repository: Arc<dyn PublisherRepository>,
        book_repository: Arc<dyn BookRepository>,
    ) -> Self {
        Self {
            author_repository,
            publisher_repository,
            book_repository,
        }
    }
}

fn not_found(resource: &str) -> AppError {
    AppError::NotFound(format!("No {resource} matches the given query."))
}
