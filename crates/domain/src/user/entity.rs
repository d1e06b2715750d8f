use super::Role;
use crate::error::{DomainError, Result};
use crate::validation;
use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LEN: usize = 8;

/// A laboratory staff member.
///
/// `password_hash` holds an Argon2 PHC string and is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub roles: Vec<Role>,
    #[serde(skip)]
    pub password_hash: String,
}

impl User {
    /// Lowest-id role held by the user.
    pub fn primary_role(&self) -> Option<Role> {
        self.roles.iter().min().copied()
    }
}

/// Record handed to the repository on insert; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub roles: Vec<Role>,
    pub password_hash: String,
}

/// Body of `POST /users`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub username: String,
    pub password: String,
    pub roles: Vec<Role>,
}

impl CreateUser {
    pub fn validate(self) -> Result<Self> {
        Ok(Self {
            name: validation::required_text("name", &self.name)?,
            username: validate_username(&self.username)?,
            password: validate_password(self.password)?,
            roles: validate_roles(self.roles)?,
        })
    }

    pub fn into_new_user(self, password_hash: String) -> NewUser {
        NewUser {
            name: self.name,
            username: self.username,
            roles: self.roles,
            password_hash,
        }
    }
}

/// Body of `PATCH /users/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub roles: Option<Vec<Role>>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.username.is_none() && self.password.is_none() && self.roles.is_none()
    }

    /// Validate every field, then apply. `hash` turns a new password into
    /// its stored form and only runs once validation has passed.
    pub fn apply<F>(self, user: &mut User, hash: F) -> Result<()>
    where
        F: FnOnce(&str) -> Result<String>,
    {
        let name = self
            .name
            .map(|n| validation::required_text("name", &n))
            .transpose()?;
        let username = self.username.as_deref().map(validate_username).transpose()?;
        let password = self.password.map(validate_password).transpose()?;
        let roles = self.roles.map(validate_roles).transpose()?;

        let password_hash = password.as_deref().map(hash).transpose()?;

        if let Some(name) = name {
            user.name = name;
        }
        if let Some(username) = username {
            user.username = username;
        }
        if let Some(roles) = roles {
            user.roles = roles;
        }
        if let Some(password_hash) = password_hash {
            user.password_hash = password_hash;
        }
        Ok(())
    }
}

/// Body of `POST /login`.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

fn validate_username(username: &str) -> Result<String> {
    let username = username.trim();
    if username.len() < 3 || username.len() > 64 {
        return Err(DomainError::validation(format!(
            "username must be between 3 and 64 characters, got {}",
            username.len()
        )));
    }
    if username.chars().any(char::is_whitespace) {
        return Err(DomainError::validation("username must not contain whitespace"));
    }
    Ok(username.to_string())
}

fn validate_password(password: String) -> Result<String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(DomainError::validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(password)
}

fn validate_roles(roles: Vec<Role>) -> Result<Vec<Role>> {
    if roles.is_empty() {
        return Err(DomainError::validation("roles must contain at least one role"));
    }
    Ok(Role::normalize(roles))
}
