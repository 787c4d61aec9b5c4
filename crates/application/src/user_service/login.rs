use tracing::info;

use super::*;

impl UserService {
    /// Exchanges username and password for a token pair.
    ///
    /// Unknown usernames still pay for one hash so response timing does not
    /// reveal which accounts exist.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<AuthOutcome> {
        let Some(user) = self.user_repository.find_by_username(username).await? else {
            let _ = self.password_hasher.hash_password(password);
            return Ok(AuthOutcome::Failed);
        };

        let password_valid = self
            .password_hasher
            .verify_password(password, &user.password_hash)?;

        if !password_valid || !user.is_active {
            info!(user_id = user.id.as_i64(), "login rejected");
            return Ok(AuthOutcome::Failed);
        }

        let tokens = self.token_issuer.issue_pair(&user.identity())?;
        info!(user_id = user.id.as_i64(), "login succeeded");

        Ok(AuthOutcome::Authenticated(tokens))
    }
}
