use super::*;

impl UserService {
    /// Issues a new access token for a valid refresh token.
    ///
    /// The user must still exist and be active.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<String> {
        let claimed = self.token_issuer.verify(refresh_token, TokenKind::Refresh)?;
        let user = self.active_user(claimed.user_id()).await?;

        self.token_issuer.issue_access(&user.identity())
    }

    /// Resolves a bearer access token to the caller's identity.
    pub async fn authenticate(&self, access_token: &str) -> AppResult<UserIdentity> {
        let claimed = self.token_issuer.verify(access_token, TokenKind::Access)?;
        let user = self.active_user(claimed.user_id()).await?;

        Ok(user.identity())
    }

    async fn active_user(&self, user_id: i64) -> AppResult<UserRecord> {
        match self.user_repository.find_by_id(UserId::new(user_id)).await? {
            Some(user) if user.is_active => Ok(user),
            _ => Err(AppError::Unauthorized(
                "User not found or inactive".to_owned(),
            )),
        }
    }
}
