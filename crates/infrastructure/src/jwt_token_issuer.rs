//! HS256 JSON Web Token issuer.

use chrono::Utc;
use folio_application::{TokenIssuer, TokenKind, TokenPair};
use folio_core::{AppError, AppResult, UserIdentity};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Shortest accepted signing secret, in bytes.
pub const JWT_SECRET_MIN_LENGTH: usize = 32;

/// Access token lifetime when none is configured.
pub const DEFAULT_ACCESS_TTL_SECONDS: u64 = 5 * 60;

/// Refresh token lifetime when none is configured.
pub const DEFAULT_REFRESH_TTL_SECONDS: u64 = 24 * 60 * 60;

#[derive(Debug, Serialize, Deserialize)]
struct TokenClaims {
    sub: String,
    username: String,
    token_type: String,
    iat: i64,
    exp: i64,
    jti: String,
}

/// Signs and verifies access and refresh tokens with a shared secret.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl_seconds: i64,
    refresh_ttl_seconds: i64,
}

impl JwtTokenIssuer {
    /// Creates an issuer. The secret must be at least
    /// [`JWT_SECRET_MIN_LENGTH`] bytes and both lifetimes positive.
    pub fn new(secret: &str, access_ttl_seconds: u64, refresh_ttl_seconds: u64) -> AppResult<Self> {
        if secret.len() < JWT_SECRET_MIN_LENGTH {
            return Err(AppError::Validation(format!(
                "JWT secret must be at least {JWT_SECRET_MIN_LENGTH} bytes"
            )));
        }

        if access_ttl_seconds == 0 || refresh_ttl_seconds == 0 {
            return Err(AppError::Validation(
                "token lifetimes must be greater than zero".to_owned(),
            ));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl_seconds: ttl_to_i64(access_ttl_seconds)?,
            refresh_ttl_seconds: ttl_to_i64(refresh_ttl_seconds)?,
        })
    }

    fn issue(&self, identity: &UserIdentity, kind: TokenKind) -> AppResult<String> {
        let ttl_seconds = match kind {
            TokenKind::Access => self.access_ttl_seconds,
            TokenKind::Refresh => self.refresh_ttl_seconds,
        };
        let issued_at = Utc::now().timestamp();

        self.sign(&TokenClaims {
            sub: identity.user_id().to_string(),
            username: identity.username().to_owned(),
            token_type: kind.as_str().to_owned(),
            iat: issued_at,
            exp: issued_at.saturating_add(ttl_seconds),
            jti: uuid::Uuid::new_v4().simple().to_string(),
        })
    }

    fn sign(&self, claims: &TokenClaims) -> AppResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|error| AppError::Internal(format!("failed to sign token: {error}")))
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue_pair(&self, identity: &UserIdentity) -> AppResult<TokenPair> {
        Ok(TokenPair {
            access: self.issue(identity, TokenKind::Access)?,
            refresh: self.issue(identity, TokenKind::Refresh)?,
        })
    }

    fn issue_access(&self, identity: &UserIdentity) -> AppResult<String> {
        self.issue(identity, TokenKind::Access)
    }

    fn verify(&self, token: &str, kind: TokenKind) -> AppResult<UserIdentity> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let claims = decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| invalid_token())?
            .claims;

        if claims.token_type != kind.as_str() {
            return Err(invalid_token());
        }

        let user_id = claims.sub.parse::<i64>().map_err(|_| invalid_token())?;
        Ok(UserIdentity::new(user_id, claims.username))
    }
}

fn invalid_token() -> AppError {
    AppError::Unauthorized("Given token not valid for any token type".to_owned())
}

fn ttl_to_i64(ttl_seconds: u64) -> AppResult<i64> {
    i64::try_from(ttl_seconds)
        .map_err(|error| AppError::Validation(format!("invalid token lifetime: {error}")))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use folio_application::{TokenIssuer, TokenKind};
    use folio_core::{AppError, AppResult, UserIdentity};

    use super::{
        DEFAULT_ACCESS_TTL_SECONDS, DEFAULT_REFRESH_TTL_SECONDS, JwtTokenIssuer, TokenClaims,
    };

    const SECRET: &str = "a-test-secret-that-is-long-enough-for-hs256";

    fn issuer() -> AppResult<JwtTokenIssuer> {
        JwtTokenIssuer::new(SECRET, DEFAULT_ACCESS_TTL_SECONDS, DEFAULT_REFRESH_TTL_SECONDS)
    }

    #[test]
    fn short_secrets_are_rejected() {
        let result = JwtTokenIssuer::new("too-short", 300, 86_400);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn issued_pair_verifies_by_kind() -> AppResult<()> {
        let issuer = issuer()?;
        let identity = UserIdentity::new(12, "reader");

        let pair = issuer.issue_pair(&identity)?;

        assert_eq!(issuer.verify(&pair.access, TokenKind::Access)?, identity);
        assert_eq!(issuer.verify(&pair.refresh, TokenKind::Refresh)?, identity);
        assert_ne!(pair.access, pair.refresh);
        Ok(())
    }

    #[test]
    fn token_kinds_are_not_interchangeable() -> AppResult<()> {
        let issuer = issuer()?;
        let pair = issuer.issue_pair(&UserIdentity::new(1, "reader"))?;

        assert!(matches!(
            issuer.verify(&pair.access, TokenKind::Refresh),
            Err(AppError::Unauthorized(_))
        ));
        assert!(matches!(
            issuer.verify(&pair.refresh, TokenKind::Access),
            Err(AppError::Unauthorized(_))
        ));
        Ok(())
    }

    #[test]
    fn tokens_signed_with_another_secret_are_rejected() -> AppResult<()> {
        let other = JwtTokenIssuer::new("another-secret-that-is-also-long-enough", 300, 600)?;
        let token = other.issue_access(&UserIdentity::new(1, "reader"))?;

        assert!(matches!(
            issuer()?.verify(&token, TokenKind::Access),
            Err(AppError::Unauthorized(_))
        ));
        Ok(())
    }

    #[test]
    fn expired_tokens_are_rejected() -> AppResult<()> {
        let issuer = issuer()?;
        let now = Utc::now().timestamp();
        let token = issuer.sign(&TokenClaims {
            sub: "1".to_owned(),
            username: "reader".to_owned(),
            token_type: "access".to_owned(),
            iat: now - 600,
            exp: now - 300,
            jti: "expired".to_owned(),
        })?;

        assert!(matches!(
            issuer.verify(&token, TokenKind::Access),
            Err(AppError::Unauthorized(_))
        ));
        Ok(())
    }

    #[test]
    fn garbage_is_rejected() -> AppResult<()> {
        assert!(matches!(
            issuer()?.verify("not.a.token", TokenKind::Access),
            Err(AppError::Unauthorized(_))
        ));
        Ok(())
    }
}
