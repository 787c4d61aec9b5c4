use std::sync::Arc;

use folio_application::{AuthorRepository, BookRepository, PublisherRepository, UserRepository};
use folio_core::AppResult;
use folio_infrastructure::{
    InMemoryCatalogRepository, InMemoryUserRepository, PostgresCatalogRepository,
    PostgresUserRepository,
};
use tracing::info;

use crate::api_config::{ApiConfig, StorageBackend};
use crate::api_services::connect_and_migrate;

pub(super) struct RepositorySet {
    pub(super) user_repository: Arc<dyn UserRepository>,
    pub(super) author_repository: Arc<dyn AuthorRepository>,
    pub(super) publisher_repository: Arc<dyn PublisherRepository>,
    pub(super) book_repository: Arc<dyn BookRepository>,
}

pub(super) async fn build_repository_set(config: &ApiConfig) -> AppResult<RepositorySet> {
    match &config.storage {
        StorageBackend::Memory => {
            info!("using in-memory storage; data is lost on restart");
            let catalog = Arc::new(InMemoryCatalogRepository::new());

            Ok(RepositorySet {
                user_repository: Arc::new(InMemoryUserRepository::new()),
                author_repository: catalog.clone(),
                publisher_repository: catalog.clone(),
                book_repository: catalog,
            })
        }
        StorageBackend::Postgres { database_url } => {
            let pool = connect_and_migrate(database_url).await?;
            let catalog = Arc::new(PostgresCatalogRepository::new(pool.clone()));

            Ok(RepositorySet {
                user_repository: Arc::new(PostgresUserRepository::new(pool)),
                author_repository: catalog.clone(),
                publisher_repository: catalog.clone(),
                book_repository: catalog,
            })
        }
    }
}
