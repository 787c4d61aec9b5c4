use super::*;

const BOOK_ISBN_CONFLICT: &str = "book with this isbn already exists.";

#[async_trait]
impl BookRepository for PostgresCatalogRepository {
    async fn create(&self, profile: BookProfile) -> AppResult<Book> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            INSERT INTO books (title, author_id, publisher_id, publication_date, isbn, summary)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, author_id, publisher_id, publication_date, isbn, summary
            "#,
        )
        .bind(profile.title())
        .bind(profile.author_id().as_i64())
        .bind(profile.publisher_id().as_i64())
        .bind(profile.publication_date())
        .bind(profile.isbn())
        .bind(profile.summary())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| constraint_error(error, BOOK_ISBN_CONFLICT, "create book"))?;

        row.into_book()
    }

    async fn list(&self) -> AppResult<Vec<Book>> {
        sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author_id, publisher_id, publication_date, isbn, summary
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list books: {error}")))?
        .into_iter()
        .map(BookRow::into_book)
        .collect()
    }

    async fn find(&self, book_id: BookId) -> AppResult<Option<Book>> {
        sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author_id, publisher_id, publication_date, isbn, summary
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(book_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find book: {error}")))?
        .map(BookRow::into_book)
        .transpose()
    }

    async fn update(&self, book: Book) -> AppResult<Book> {
        let profile = book.profile();
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            UPDATE books
            SET title = $2, author_id = $3, publisher_id = $4, publication_date = $5,
                isbn = $6, summary = $7
            WHERE id = $1
            RETURNING id, title, author_id, publisher_id, publication_date, isbn, summary
            "#,
        )
        .bind(book.id().as_i64())
        .bind(profile.title())
        .bind(profile.author_id().as_i64())
        .bind(profile.publisher_id().as_i64())
        .bind(profile.publication_date())
        .bind(profile.isbn())
        .bind(profile.summary())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| constraint_error(error, BOOK_ISBN_CONFLICT, "update book"))?;

        row.ok_or_else(|| not_found("book", book.id().as_i64()))?
            .into_book()
    }

    async fn delete(&self, book_id: BookId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(book_id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to delete book: {error}")))?;

        Ok(result.rows_affected() > 0)
    }
}
