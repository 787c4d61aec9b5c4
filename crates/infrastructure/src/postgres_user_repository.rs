//! PostgreSQL-backed user repository.

use async_trait::async_trait;
use sqlx::PgPool;

use folio_application::{UserRecord, UserRepository};
use folio_core::{AppError, AppResult};
use folio_domain::UserId;

/// PostgreSQL implementation of the user repository port.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    is_active: bool,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            username: row.username,
            email: row.email,
            password_hash: row.password_hash,
            is_active: row.is_active,
        }
    }
}

mod account;
mod lookup;

#[cfg(test)]
mod tests;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserRecord>> {
        self.find_by_username_impl(username).await
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<UserRecord>> {
        self.find_by_id_impl(user_id).await
    }

    async fn create(&self, username: &str, email: &str, password_hash: &str) -> AppResult<UserId> {
        self.create_impl(username, email, password_hash).await
    }
}

fn username_conflict_or_internal(error: sqlx::Error, operation: &str) -> AppError {
    if let sqlx::Error::Database(ref database_error) = error
        && database_error.code().as_deref() == Some("23505")
    {
        return AppError::Conflict("A user with that username already exists.".to_owned());
    }

    AppError::Internal(format!("failed to {operation}: {error}"))
}
