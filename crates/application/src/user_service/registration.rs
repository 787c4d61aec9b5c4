use tracing::info;

use super::*;

impl UserService {
    /// Registers a new user.
    ///
    /// The username, optional email and password are validated before the
    /// password is hashed. A taken username is a `Conflict`.
    pub async fn register(&self, params: RegisterParams) -> AppResult<UserId> {
        let username = Username::new(params.username)?;
        let email = match params.email.as_deref().map(str::trim) {
            Some(email) if !email.is_empty() => String::from(EmailAddress::new(email)?),
            _ => String::new(),
        };
        validate_password(&params.password, username.as_str())?;

        if self
            .user_repository
            .find_by_username(username.as_str())
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "A user with that username already exists.".to_owned(),
            ));
        }

        let password_hash = self.password_hasher.hash_password(&params.password)?;
        let user_id = self
            .user_repository
            .create(username.as_str(), &email, &password_hash)
            .await?;

        info!(user_id = user_id.as_i64(), "user registered");
        Ok(user_id)
    }
}
