use serde::{Deserialize, Serialize};

/// Authenticated user attached to a request after token verification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserIdentity {
    user_id: i64,
    username: String,
}

impl UserIdentity {
    /// Creates an identity from a verified user id and username.
    #[must_use]
    pub fn new(user_id: i64, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }

    /// Returns the numeric user id.
    #[must_use]
    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    /// Returns the username the identity was issued for.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::UserIdentity;

    #[test]
    fn identity_round_trips_through_json() -> Result<(), serde_json::Error> {
        let identity = UserIdentity::new(7, "reader");
        let encoded = serde_json::to_string(&identity)?;
        let decoded: UserIdentity = serde_json::from_str(&encoded)?;

        assert_eq!(decoded.user_id(), 7);
        assert_eq!(decoded.username(), "reader");
        Ok(())
    }
}
