//! Process-local user repository.

use async_trait::async_trait;
use folio_application::{UserRecord, UserRepository};
use folio_core::{AppError, AppResult};
use folio_domain::UserId;
use tokio::sync::RwLock;

#[derive(Default)]
struct UserTable {
    last_id: i64,
    rows: Vec<UserRecord>,
}

/// In-memory implementation of the user repository port.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserRecord>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<UserRecord>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|user| user.id == user_id).cloned())
    }

    async fn create(&self, username: &str, email: &str, password_hash: &str) -> AppResult<UserId> {
        let mut table = self.table.write().await;
        if table.rows.iter().any(|user| user.username == username) {
            return Err(AppError::Conflict(
                "A user with that username already exists.".to_owned(),
            ));
        }

        table.last_id += 1;
        let id = UserId::new(table.last_id);
        table.rows.push(UserRecord {
            id,
            username: username.to_owned(),
            email: email.to_owned(),
            password_hash: password_hash.to_owned(),
            is_active: true,
        });

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use folio_application::UserRepository;
    use folio_core::{AppError, AppResult};
    use folio_domain::UserId;

    use super::InMemoryUserRepository;

    #[tokio::test]
    async fn create_assigns_sequential_ids() -> AppResult<()> {
        let repository = InMemoryUserRepository::new();

        let first = repository.create("ann", "", "hash").await?;
        let second = repository.create("bob", "bob@example.com", "hash").await?;

        assert_eq!(first, UserId::new(1));
        assert_eq!(second, UserId::new(2));
        assert!(matches!(
            repository.find_by_id(second).await?,
            Some(user) if user.username == "bob" && user.is_active
        ));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_username_conflicts() -> AppResult<()> {
        let repository = InMemoryUserRepository::new();
        repository.create("ann", "", "hash").await?;

        let result = repository.create("ann", "", "other").await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        Ok(())
    }
}
