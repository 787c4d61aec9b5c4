use super::*;

impl PostgresUserRepository {
    pub(super) async fn create_impl(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> AppResult<UserId> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|error| username_conflict_or_internal(error, "create user"))?;

        Ok(UserId::new(id))
    }
}
