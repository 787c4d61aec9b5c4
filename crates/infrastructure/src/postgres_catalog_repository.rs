//! PostgreSQL-backed catalog repository.
//!
//! Deletes rely on `ON DELETE CASCADE` foreign keys from `books`.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use folio_application::{AuthorRepository, BookRepository, PublisherRepository};
use folio_core::{AppError, AppResult};
use folio_domain::{
    Author, AuthorId, AuthorProfile, Book, BookId, BookProfile, Publisher, PublisherId,
    PublisherProfile,
};

mod authors;
mod books;
mod publishers;

#[cfg(test)]
mod tests;

/// PostgreSQL implementation of the catalog repository ports.
#[derive(Clone)]
pub struct PostgresCatalogRepository {
    pool: PgPool,
}

impl PostgresCatalogRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AuthorRow {
    id: i64,
    name: String,
    birth_date: NaiveDate,
    nationality: String,
    biography: String,
    email: String,
}

impl AuthorRow {
    fn into_author(self) -> AppResult<Author> {
        let profile = AuthorProfile::new(
            self.name,
            self.birth_date,
            self.nationality,
            self.biography,
            self.email,
        )
        .map_err(|error| stored_row_invalid("author", self.id, error))?;

        Ok(Author::new(AuthorId::new(self.id), profile))
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PublisherRow {
    id: i64,
    name: String,
    address: String,
    website: String,
    contact_email: String,
    established_year: i32,
}

impl PublisherRow {
    fn into_publisher(self) -> AppResult<Publisher> {
        let established_year = u32::try_from(self.established_year).map_err(|error| {
            AppError::Internal(format!(
                "stored publisher {} has invalid established_year: {error}",
                self.id
            ))
        })?;
        let profile = PublisherProfile::new(
            self.name,
            self.address,
            &self.website,
            self.contact_email,
            established_year,
        )
        .map_err(|error| stored_row_invalid("publisher", self.id, error))?;

        Ok(Publisher::new(PublisherId::new(self.id), profile))
    }
}

#[derive(Debug, sqlx::FromRow)]
struct BookRow {
    id: i64,
    title: String,
    author_id: i64,
    publisher_id: i64,
    publication_date: NaiveDate,
    isbn: String,
    summary: String,
}

impl BookRow {
    fn into_book(self) -> AppResult<Book> {
        let profile = BookProfile::new(
            self.title,
            AuthorId::new(self.author_id),
            PublisherId::new(self.publisher_id),
            self.publication_date,
            &self.isbn,
            self.summary,
        )
        .map_err(|error| stored_row_invalid("book", self.id, error))?;

        Ok(Book::new(BookId::new(self.id), profile))
    }
}

fn stored_row_invalid(table: &str, id: i64, error: AppError) -> AppError {
    AppError::Internal(format!("stored {table} {id} failed validation: {error}"))
}

fn established_year_column(profile: &PublisherProfile) -> AppResult<i32> {
    i32::try_from(profile.established_year())
        .map_err(|error| AppError::Validation(format!("established_year is out of range: {error}")))
}

/// Maps constraint violations to domain errors; everything else is internal.
fn constraint_error(error: sqlx::Error, conflict_message: &str, operation: &str) -> AppError {
    if let sqlx::Error::Database(ref database_error) = error {
        match database_error.code().as_deref() {
            Some("23505") => return AppError::Conflict(conflict_message.to_owned()),
            Some("23503") => {
                return AppError::Validation(
                    "referenced author or publisher does not exist".to_owned(),
                );
            }
            _ => {}
        }
    }

    AppError::Internal(format!("failed to {operation}: {error}"))
}

fn not_found(table: &str, id: i64) -> AppError {
    AppError::NotFound(format!("{table} {id} does not exist"))
}
