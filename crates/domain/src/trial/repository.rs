use super::{NewTrial, Trial};
use crate::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait TrialRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Trial>, DomainError>;

    async fn find_by_number(&self, trial_number: i32) -> Result<Option<Trial>, DomainError>;

    async fn insert(&self, trial: &NewTrial) -> Result<Trial, DomainError>;

    async fn update(&self, trial: &Trial) -> Result<Trial, DomainError>;

    async fn delete(&self, trial_number: i32) -> Result<bool, DomainError>;

    async fn count_by_result(&self, result_number: i32) -> Result<u64, DomainError>;

    async fn count_by_user(&self, id_user: i32) -> Result<u64, DomainError>;
}
