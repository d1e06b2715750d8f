use super::{Claims, PasswordHasher, TokenService};
use domain::user::{CreateUser, Credentials, Role, User, UserRepository};
use domain::{DomainError, validation};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

const BAD_CREDENTIALS: &str = "invalid username or password";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub expires_in: u64,
    pub user: UserSummary,
}

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: TokenService,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Exchange credentials for an access token. Unknown users and wrong
    /// passwords get the same answer.
    pub async fn login(&self, credentials: Credentials) -> Result<LoginResponse, DomainError> {
        let username = validation::required_text("username", &credentials.username)?;
        if credentials.password.is_empty() {
            return Err(DomainError::validation("password is required"));
        }

        let Some(user) = self.users.find_by_username(&username).await? else {
            debug!(username = %username, "Login for unknown user");
            return Err(DomainError::Unauthorized(BAD_CREDENTIALS.to_string()));
        };

        if !self.hasher.verify(&credentials.password, &user.password_hash)? {
            warn!(user_id = user.id, "Login with wrong password");
            return Err(DomainError::Unauthorized(BAD_CREDENTIALS.to_string()));
        }

        let access_token = self.tokens.issue(&user)?;
        info!(user_id = user.id, username = %user.username, "User logged in");

        Ok(LoginResponse {
            access_token,
            expires_in: self.tokens.ttl_secs(),
            user: UserSummary {
                id: user.id,
                name: user.name,
                roles: user.roles,
            },
        })
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, DomainError> {
        self.tokens.verify(token)
    }

    /// Create an `Admin` account unless the username is already taken.
    /// Returns the new user, or `None` when nothing had to be done.
    pub async fn ensure_bootstrap_admin(
        &self,
        username: &str,
        password: &str,
        name: &str,
    ) -> Result<Option<User>, DomainError> {
        if self.users.find_by_username(username.trim()).await?.is_some() {
            debug!(username = %username, "Bootstrap admin already present");
            return Ok(None);
        }

        let input = CreateUser {
            name: name.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            roles: vec![Role::Admin],
        }
        .validate()?;

        let hash = self.hasher.hash(&input.password)?;
        let user = self.users.insert(&input.into_new_user(hash)).await?;
        info!(user_id = user.id, username = %user.username, "👤 Bootstrap admin created");
        Ok(Some(user))
    }
}
