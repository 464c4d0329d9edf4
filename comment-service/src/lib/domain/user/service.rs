use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Role;
use chrono::Utc;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::LoginResult;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password verification and token issuance
    ///
    /// # Returns
    /// Configured user service instance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            password_hash,
            role: command.role,
            created_at: Utc::now(),
            last_login: None,
        };

        self.repository.create(user).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginResult, UserError> {
        let now = Utc::now();

        // A syntactically invalid username cannot exist in the store, but
        // the failure path still runs the full password verification below.
        let user = match Username::new(username.to_string()) {
            Ok(username) => self.repository.find_by_username(&username).await?,
            Err(_) => None,
        };

        let result = self
            .authenticator
            .authenticate(
                password,
                user.as_ref().map(|u| u.password_hash.as_str()),
                user.as_ref().map(|u| u.id.to_string()).unwrap_or_default(),
                user.as_ref().map(|u| u.role).unwrap_or(Role::Standard),
                now,
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
                other => UserError::Unknown(other.to_string()),
            })?;

        let Some(mut user) = user else {
            return Err(UserError::InvalidCredentials);
        };

        self.repository.record_login(&user.id, now).await?;
        user.last_login = Some(now);

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginResult {
            user,
            token: result.access_token,
        })
    }
}
