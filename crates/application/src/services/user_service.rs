use super::{empty_patch, still_referenced};
use crate::auth::PasswordHasher;
use domain::DomainError;
use domain::analysis::AnalysisRepository;
use domain::lab_result::LabResultRepository;
use domain::trial::TrialRepository;
use domain::user::{CreateUser, User, UserPatch, UserRepository};
use std::sync::Arc;
use tracing::info;

pub struct UserService {
    users: Arc<dyn UserRepository>,
    analyses: Arc<dyn AnalysisRepository>,
    results: Arc<dyn LabResultRepository>,
    trials: Arc<dyn TrialRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        analyses: Arc<dyn AnalysisRepository>,
        results: Arc<dyn LabResultRepository>,
        trials: Arc<dyn TrialRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            users,
            analyses,
            results,
            trials,
            hasher,
        }
    }

    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.users.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<User, DomainError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", id))
    }

    pub async fn create(&self, input: CreateUser) -> Result<User, DomainError> {
        let input = input.validate()?;
        self.ensure_username_free(&input.username, None).await?;

        let hash = self.hasher.hash(&input.password)?;
        let user = self.users.insert(&input.into_new_user(hash)).await?;
        info!(user_id = user.id, username = %user.username, "User created");
        Ok(user)
    }

    pub async fn update(&self, id: i32, patch: UserPatch) -> Result<User, DomainError> {
        if patch.is_empty() {
            return Err(empty_patch());
        }
        let mut user = self.get(id).await?;
        patch.apply(&mut user, |password| self.hasher.hash(password))?;
        self.ensure_username_free(&user.username, Some(id)).await?;

        let user = self.users.update(&user).await?;
        info!(user_id = user.id, "User updated");
        Ok(user)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        self.get(id).await?;

        let analyses = self.analyses.count_by_user(id).await?;
        if analyses > 0 {
            return Err(still_referenced("user", id, "analyses", analyses));
        }
        let results = self.results.count_by_user(id).await?;
        if results > 0 {
            return Err(still_referenced("user", id, "results", results));
        }
        let trials = self.trials.count_by_user(id).await?;
        if trials > 0 {
            return Err(still_referenced("user", id, "trials", trials));
        }

        if !self.users.delete(id).await? {
            return Err(DomainError::not_found("User", id));
        }
        info!(user_id = id, "User deleted");
        Ok(())
    }

    async fn ensure_username_free(&self, username: &str, owner: Option<i32>) -> Result<(), DomainError> {
        match self.users.find_by_username(username).await? {
            Some(existing) if Some(existing.id) != owner => Err(DomainError::conflict(format!(
                "username {username} is already taken"
            ))),
            _ => Ok(()),
        }
    }
}
