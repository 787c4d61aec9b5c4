use super::*;

const PUBLISHER_CONFLICT: &str = "publisher conflicts with an existing record.";

#[async_trait]
impl PublisherRepository for PostgresCatalogRepository {
    async fn create(&self, profile: PublisherProfile) -> AppResult<Publisher> {
        let row = sqlx::query_as::<_, PublisherRow>(
            r#"
            INSERT INTO publishers (name, address, website, contact_email, established_year)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, address, website, contact_email, established_year
            "#,
        )
        .bind(profile.name())
        .bind(profile.address())
        .bind(profile.website())
        .bind(profile.contact_email())
        .bind(established_year_column(&profile)?)
        .fetch_one(&self.pool)
        .await
        .map_err(|error| constraint_error(error, PUBLISHER_CONFLICT, "create publisher"))?;

        row.into_publisher()
    }

    async fn list(&self) -> AppResult<Vec<Publisher>> {
        sqlx::query_as::<_, PublisherRow>(
            r#"
            SELECT id, name, address, website, contact_email, established_year
            FROM publishers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list publishers: {error}")))?
        .into_iter()
        .map(PublisherRow::into_publisher)
        .collect()
    }

    async fn find(&self, publisher_id: PublisherId) -> AppResult<Option<Publisher>> {
        sqlx::query_as::<_, PublisherRow>(
            r#"
            SELECT id, name, address, website, contact_email, established_year
            FROM publishers
            WHERE id = $1
            "#,
        )
        .bind(publisher_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find publisher: {error}")))?
        .map(PublisherRow::into_publisher)
        .transpose()
    }

    async fn update(&self, publisher: Publisher) -> AppResult<Publisher> {
        let profile = publisher.profile();
        let row = sqlx::query_as::<_, PublisherRow>(
            r#"
            UPDATE publishers
            SET name = $2, address = $3, website = $4, contact_email = $5, established_year = $6
            WHERE id = $1
            RETURNING id, name, address, website, contact_email, established_year
            "#,
        )
        .bind(publisher.id().as_i64())
        .bind(profile.name())
        .bind(profile.address())
        .bind(profile.website())
        .bind(profile.contact_email())
        .bind(established_year_column(profile)?)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| constraint_error(error, PUBLISHER_CONFLICT, "update publisher"))?;

        row.ok_or_else(|| not_found("publisher", publisher.id().as_i64()))?
            .into_publisher()
    }

    async fn delete(&self, publisher_id: PublisherId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM publishers WHERE id = $1")
            .bind(publisher_id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to delete publisher: {error}")))?;

        Ok(result.rows_affected() > 0)
    }
}
