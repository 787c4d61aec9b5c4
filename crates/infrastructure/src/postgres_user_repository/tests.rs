use folio_application::UserRepository;
use folio_core::AppError;
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

use super::PostgresUserRepository;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

async fn test_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        return None;
    };

    let pool = match PgPoolOptions::new()
        .max_connections(2)
        .connect(database_url.as_str())
        .await
    {
        Ok(pool) => pool,
        Err(error) => panic!("failed to connect to DATABASE_URL in test: {error}"),
    };

    if let Err(error) = MIGRATOR.run(&pool).await {
        panic!("failed to run migrations for postgres user tests: {error}");
    }

    Some(pool)
}

#[tokio::test]
async fn create_then_find_by_username_and_id() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresUserRepository::new(pool);
    let username = format!("reader-{}", uuid::Uuid::new_v4().simple());

    let created = repository.create(&username, "", "$argon2id$stub").await;
    assert!(created.is_ok());
    let Ok(user_id) = created else {
        return;
    };

    let by_username = repository.find_by_username(&username).await;
    assert!(matches!(by_username, Ok(Some(ref user)) if user.id == user_id && user.is_active));

    let by_id = repository.find_by_id(user_id).await;
    assert!(matches!(by_id, Ok(Some(ref user)) if user.username == username));
}

#[tokio::test]
async fn duplicate_username_maps_to_conflict() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresUserRepository::new(pool);
    let username = format!("dup-{}", uuid::Uuid::new_v4().simple());

    assert!(repository.create(&username, "", "hash").await.is_ok());
    let second = repository.create(&username, "", "hash").await;

    assert!(matches!(second, Err(AppError::Conflict(_))));
}
