use super::*;

const AUTHOR_EMAIL_CONFLICT: &str = "author with this email already exists.";

#[async_trait]
impl AuthorRepository for PostgresCatalogRepository {
    async fn create(&self, profile: AuthorProfile) -> AppResult<Author> {
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            INSERT INTO authors (name, birth_date, nationality, biography, email)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, birth_date, nationality, biography, email
            "#,
        )
        .bind(profile.name())
        .bind(profile.birth_date())
        .bind(profile.nationality())
        .bind(profile.biography())
        .bind(profile.email())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| constraint_error(error, AUTHOR_EMAIL_CONFLICT, "create author"))?;

        row.into_author()
    }

    async fn list(&self) -> AppResult<Vec<Author>> {
        sqlx::query_as::<_, AuthorRow>(
            r#"
            SELECT id, name, birth_date, nationality, biography, email
            FROM authors
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list authors: {error}")))?
        .into_iter()
        .map(AuthorRow::into_author)
        .collect()
    }

    async fn find(&self, author_id: AuthorId) -> AppResult<Option<Author>> {
        sqlx::query_as::<_, AuthorRow>(
            r#"
            SELECT id, name, birth_date, nationality, biography, email
            FROM authors
            WHERE id = $1
            "#,
        )
        .bind(author_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find author: {error}")))?
        .map(AuthorRow::into_author)
        .transpose()
    }

    async fn update(&self, author: Author) -> AppResult<Author> {
        let profile = author.profile();
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            UPDATE authors
            SET name = $2, birth_date = $3, nationality = $4, biography = $5, email = $6
            WHERE id = $1
            RETURNING id, name, birth_date, nationality, biography, email
            "#,
        )
        .bind(author.id().as_i64())
        .bind(profile.name())
        .bind(profile.birth_date())
        .bind(profile.nationality())
        .bind(profile.biography())
        .bind(profile.email())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| constraint_error(error, AUTHOR_EMAIL_CONFLICT, "update author"))?;

        row.ok_or_else(|| not_found("author", author.id().as_i64()))?
            .into_author()
    }

    async fn delete(&self, author_id: AuthorId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(author_id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to delete author: {error}")))?;

        Ok(result.rows_affected() > 0)
    }
}
