use chrono::NaiveDate;
use folio_application::{AuthorRepository, BookRepository, PublisherRepository};
use folio_core::AppError;
use folio_domain::{AuthorProfile, BookProfile, PublisherProfile};
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

use super::PostgresCatalogRepository;

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
        panic!("failed to run migrations for postgres catalog tests: {error}");
    }

    Some(pool)
}

fn unique_suffix() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Thirteen digits derived from a fresh UUID.
fn unique_isbn() -> String {
    let digits: String = uuid::Uuid::new_v4()
        .as_u128()
        .to_string()
        .chars()
        .take(13)
        .collect();
    format!("{digits:0>13}")
}

#[tokio::test]
async fn deleting_author_cascades_to_books() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repository = PostgresCatalogRepository::new(pool);

    let (Some(birth_date), Some(published)) = (
        NaiveDate::from_ymd_opt(1947, 6, 22),
        NaiveDate::from_ymd_opt(1979, 6, 1),
    ) else {
        return;
    };

    let author = AuthorProfile::new(
        "Octavia Butler",
        birth_date,
        "American",
        "Kindred.",
        format!("octavia-{}@example.com", unique_suffix()),
    );
    let publisher = PublisherProfile::new(
        "Beacon",
        "25 Beacon Street",
        "https://beacon.example",
        "info@beacon.example",
        1854,
    );
    let (Ok(author), Ok(publisher)) = (author, publisher) else {
        panic!("fixture profiles must validate");
    };

    let author = AuthorRepository::create(&repository, author).await;
    let publisher = PublisherRepository::create(&repository, publisher).await;
    let (Ok(author), Ok(publisher)) = (author, publisher) else {
        panic!("fixture rows must insert");
    };

    let book = BookProfile::new(
        "Kindred",
        author.id(),
        publisher.id(),
        published,
        &unique_isbn(),
        "Time travel.",
    );
    let Ok(book) = book else {
        panic!("fixture book must validate");
    };
    let created = BookRepository::create(&repository, book).await;
    let Ok(created) = created else {
        panic!("fixture book must insert");
    };

    assert!(matches!(
        AuthorRepository::delete(&repository, author.id()).await,
        Ok(true)
    ));
    assert!(matches!(
        BookRepository::find(&repository, created.id()).await,
        Ok(None)
    ));
}

#[tokio::test]
async fn duplicate_author_email_maps_to_conflict() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repository = PostgresCatalogRepository::new(pool);
    let Some(birth_date) = NaiveDate::from_ymd_opt(1929, 10, 21) else {
        return;
    };
    let email = format!("ursula-{}@example.com", unique_suffix());

    let profile = AuthorProfile::new("Ursula", birth_date, "American", "Earthsea.", email);
    let Ok(profile) = profile else {
        panic!("fixture profile must validate");
    };

    assert!(AuthorRepository::create(&repository, profile.clone()).await.is_ok());
    let second = AuthorRepository::create(&repository, profile).await;

    assert!(matches!(second, Err(AppError::Conflict(_))));
}
