//! User ports and application service.
//!
//! Owns registration, credential login and bearer token handling. Login
//! failures are reported generically so callers cannot probe for accounts.

mod login;
mod registration;
mod tokens;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use async_trait::async_trait;

use folio_core::{AppError, AppResult, UserIdentity};
use folio_domain::{EmailAddress, UserId, Username, validate_password};

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// User record returned by repository queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Unique user identifier.
    pub id: UserId,
    /// Login name, unique across users.
    pub username: String,
    /// Contact email; empty when none was given.
    pub email: String,
    /// Argon2id password hash.
    pub password_hash: String,
    /// Inactive users cannot log in or refresh tokens.
    pub is_active: bool,
}

impl UserRecord {
    /// Identity attached to requests authenticated as this user.
    #[must_use]
    pub fn identity(&self) -> UserIdentity {
        UserIdentity::new(self.id.as_i64(), self.username.clone())
    }
}

/// Repository port for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by exact username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserRecord>>;

    /// Finds a user by their unique identifier.
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<UserRecord>>;

    /// Creates an active user. Returns `Conflict` if the username is taken.
    async fn create(&self, username: &str, email: &str, password_hash: &str) -> AppResult<UserId>;
}

/// Port for password hashing operations.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plaintext password.
    fn hash_password(&self, password: &str) -> AppResult<String>;

    /// Verifies a plaintext password against a stored hash.
    fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool>;
}

/// Purpose of a signed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Short-lived bearer token for API calls.
    Access,
    /// Longer-lived token exchanged for new access tokens.
    Refresh,
}

impl TokenKind {
    /// Stable claim value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Refresh => "refresh",
        }
    }
}

/// Access and refresh tokens issued on login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    /// Bearer token for API calls.
    pub access: String,
    /// Token for `refresh`.
    pub refresh: String,
}

/// Port for signing and verifying bearer tokens.
pub trait TokenIssuer: Send + Sync {
    /// Issues a new access/refresh pair.
    fn issue_pair(&self, identity: &UserIdentity) -> AppResult<TokenPair>;

    /// Issues a new access token.
    fn issue_access(&self, identity: &UserIdentity) -> AppResult<String>;

    /// Verifies signature, expiry and kind. Any failure is `Unauthorized`.
    fn verify(&self, token: &str, kind: TokenKind) -> AppResult<UserIdentity>;
}

// ---------------------------------------------------------------------------
// Outcomes and parameters
// ---------------------------------------------------------------------------

/// Result of a login attempt.
#[derive(Debug)]
pub enum AuthOutcome {
    /// Credentials matched an active user.
    Authenticated(TokenPair),
    /// Unknown user, wrong password or inactive account.
    Failed,
}

/// Parameters for user registration.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    /// Requested username.
    pub username: String,
    /// Optional contact email.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: String,
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Application service for user registration and authentication.
#[derive(Clone)]
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_issuer: Arc<dyn TokenIssuer>,
}

impl UserService {
    /// Creates a new user service.
    #[must_use]
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_issuer,
        }
    }
}
