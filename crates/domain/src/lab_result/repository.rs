use super::{LabResult, NewLabResult};
use crate::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait LabResultRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<LabResult>, DomainError>;

    async fn find_by_number(&self, result_number: i32) -> Result<Option<LabResult>, DomainError>;

    async fn insert(&self, result: &NewLabResult) -> Result<LabResult, DomainError>;

    async fn update(&self, result: &LabResult) -> Result<LabResult, DomainError>;

    async fn delete(&self, result_number: i32) -> Result<bool, DomainError>;

    async fn count_by_analysis(&self, analysis_number: i32) -> Result<u64, DomainError>;

    async fn count_by_user(&self, id_user: i32) -> Result<u64, DomainError>;
}
