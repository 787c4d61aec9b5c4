use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use folio_core::{AppError, AppResult, UserIdentity};
use folio_domain::UserId;

use super::{
    AuthOutcome, PasswordHasher, RegisterParams, TokenIssuer, TokenKind, TokenPair, UserRecord,
    UserRepository, UserService,
};

#[derive(Default)]
struct FakeUserRepository {
    users: Mutex<Vec<UserRecord>>,
}

impl FakeUserRepository {
    async fn deactivate(&self, username: &str) {
        let mut users = self.users.lock().await;
        if let Some(user) = users.iter_mut().find(|user| user.username == username) {
            user.is_active = false;
        }
    }

    async fn stored(&self, username: &str) -> Option<UserRecord> {
        self.users
            .lock()
            .await
            .iter()
            .find(|user| user.username == username)
            .cloned()
    }
}

#[async_trait]
impl UserRepository for FakeUserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserRecord>> {
        Ok(self.stored(username).await)
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<UserRecord>> {
        Ok(self
            .users
            .lock()
            .await
            .iter()
            .find(|user| user.id == user_id)
            .cloned())
    }

    async fn create(&self, username: &str, email: &str, password_hash: &str) -> AppResult<UserId> {
        let mut users = self.users.lock().await;
        if users.iter().any(|user| user.username == username) {
            return Err(AppError::Conflict("duplicate username".to_owned()));
        }

        let id = UserId::new(i64::try_from(users.len()).unwrap_or(i64::MAX) + 1);
        users.push(UserRecord {
            id,
            username: username.to_owned(),
            email: email.to_owned(),
            password_hash: password_hash.to_owned(),
            is_active: true,
        });
        Ok(id)
    }
}

#[derive(Default)]
struct FakePasswordHasher {
    hash_calls: AtomicUsize,
}

impl PasswordHasher for FakePasswordHasher {
    fn hash_password(&self, password: &str) -> AppResult<String> {
        self.hash_calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("hashed:{password}"))
    }

    fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool> {
        Ok(hash == format!("hashed:{password}"))
    }
}

/// Issues readable `<kind>:<id>:<username>` tokens.
struct FakeTokenIssuer;

impl FakeTokenIssuer {
    fn token(kind: TokenKind, identity: &UserIdentity) -> String {
        format!("{}:{}:{}", kind.as_str(), identity.user_id(), identity.username())
    }
}

impl TokenIssuer for FakeTokenIssuer {
    fn issue_pair(&self, identity: &UserIdentity) -> AppResult<TokenPair> {
        Ok(TokenPair {
            access: Self::token(TokenKind::Access, identity),
            refresh: Self::token(TokenKind::Refresh, identity),
        })
    }

    fn issue_access(&self, identity: &UserIdentity) -> AppResult<String> {
        Ok(Self::token(TokenKind::Access, identity))
    }

    fn verify(&self, token: &str, kind: TokenKind) -> AppResult<UserIdentity> {
        let mut parts = token.splitn(3, ':');
        let (Some(claimed_kind), Some(user_id), Some(username)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(AppError::Unauthorized("malformed token".to_owned()));
        };

        if claimed_kind != kind.as_str() {
            return Err(AppError::Unauthorized("wrong token type".to_owned()));
        }

        let user_id = user_id
            .parse::<i64>()
            .map_err(|_| AppError::Unauthorized("malformed token".to_owned()))?;
        Ok(UserIdentity::new(user_id, username))
    }
}

struct Fixture {
    service: UserService,
    repository: Arc<FakeUserRepository>,
    hasher: Arc<FakePasswordHasher>,
}

fn fixture() -> Fixture {
    let repository = Arc::new(FakeUserRepository::default());
    let hasher = Arc::new(FakePasswordHasher::default());
    let service = UserService::new(repository.clone(), hasher.clone(), Arc::new(FakeTokenIssuer));

    Fixture {
        service,
        repository,
        hasher,
    }
}

fn params(username: &str, password: &str) -> RegisterParams {
    RegisterParams {
        username: username.to_owned(),
        email: Some("reader@example.com".to_owned()),
        password: password.to_owned(),
    }
}

#[tokio::test]
async fn register_stores_hashed_password() -> AppResult<()> {
    let fixture = fixture();

    let user_id = fixture
        .service
        .register(params("reader", "correct horse battery"))
        .await?;

    let stored = fixture.repository.stored("reader").await;
    assert!(matches!(
        stored,
        Some(user) if user.id == user_id
            && user.password_hash == "hashed:correct horse battery"
            && user.email == "reader@example.com"
    ));
    Ok(())
}

#[tokio::test]
async fn register_without_email_stores_empty_email() -> AppResult<()> {
    let fixture = fixture();

    fixture
        .service
        .register(RegisterParams {
            username: "quiet".to_owned(),
            email: None,
            password: "correct horse battery".to_owned(),
        })
        .await?;

    assert!(matches!(
        fixture.repository.stored("quiet").await,
        Some(user) if user.email.is_empty()
    ));
    Ok(())
}

#[tokio::test]
async fn register_rejects_duplicate_username() -> AppResult<()> {
    let fixture = fixture();
    fixture
        .service
        .register(params("reader", "correct horse battery"))
        .await?;

    let result = fixture
        .service
        .register(params("reader", "another long passphrase"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    Ok(())
}

#[tokio::test]
async fn register_rejects_weak_passwords_before_hashing() {
    let fixture = fixture();

    for password in ["short", "12345678901", "password", "readinglamp"] {
        let result = fixture
            .service
            .register(params("readinglamp", password))
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))), "{password}");
    }

    assert_eq!(fixture.hasher.hash_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn login_returns_token_pair_for_valid_credentials() -> AppResult<()> {
    let fixture = fixture();
    fixture
        .service
        .register(params("reader", "correct horse battery"))
        .await?;

    let outcome = fixture
        .service
        .login("reader", "correct horse battery")
        .await?;

    assert!(matches!(
        outcome,
        AuthOutcome::Authenticated(tokens)
            if tokens.access == "access:1:reader" && tokens.refresh == "refresh:1:reader"
    ));
    Ok(())
}

#[tokio::test]
async fn login_fails_generically() -> AppResult<()> {
    let fixture = fixture();
    fixture
        .service
        .register(params("reader", "correct horse battery"))
        .await?;

    let wrong_password = fixture.service.login("reader", "wrong password").await?;
    let unknown_user = fixture.service.login("nobody", "correct horse battery").await?;

    assert!(matches!(wrong_password, AuthOutcome::Failed));
    assert!(matches!(unknown_user, AuthOutcome::Failed));
    // One hash for registration and one for the unknown user.
    assert_eq!(fixture.hasher.hash_calls.load(Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test]
async fn inactive_users_cannot_log_in_or_refresh() -> AppResult<()> {
    let fixture = fixture();
    fixture
        .service
        .register(params("reader", "correct horse battery"))
        .await?;
    fixture.repository.deactivate("reader").await;

    let outcome = fixture
        .service
        .login("reader", "correct horse battery")
        .await?;
    let refreshed = fixture.service.refresh("refresh:1:reader").await;

    assert!(matches!(outcome, AuthOutcome::Failed));
    assert!(matches!(refreshed, Err(AppError::Unauthorized(_))));
    Ok(())
}

#[tokio::test]
async fn refresh_issues_access_token() -> AppResult<()> {
    let fixture = fixture();
    fixture
        .service
        .register(params("reader", "correct horse battery"))
        .await?;

    let access = fixture.service.refresh("refresh:1:reader").await?;

    assert_eq!(access, "access:1:reader");
    Ok(())
}

#[tokio::test]
async fn refresh_rejects_access_tokens() -> AppResult<()> {
    let fixture = fixture();
    fixture
        .service
        .register(params("reader", "correct horse battery"))
        .await?;

    let result = fixture.service.refresh("access:1:reader").await;

    assert!(matches!(result, Err(AppError::Unauthorized(_))));
    Ok(())
}

#[tokio::test]
async fn authenticate_resolves_current_username() -> AppResult<()> {
    let fixture = fixture();
    fixture
        .service
        .register(params("reader", "correct horse battery"))
        .await?;

    let identity = fixture.service.authenticate("access:1:reader").await?;
    let unknown = fixture.service.authenticate("access:42:ghost").await;

    assert_eq!(identity, UserIdentity::new(1, "reader"));
    assert!(matches!(unknown, Err(AppError::Unauthorized(_))));
    Ok(())
}
