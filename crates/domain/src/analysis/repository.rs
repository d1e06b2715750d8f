use super::{Analysis, NewAnalysis};
use crate::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Analysis>, DomainError>;

    async fn find_by_number(&self, analysis_number: i32)
    -> Result<Option<Analysis>, DomainError>;

    async fn insert(&self, analysis: &NewAnalysis) -> Result<Analysis, DomainError>;

    async fn update(&self, analysis: &Analysis) -> Result<Analysis, DomainError>;

    async fn delete(&self, analysis_number: i32) -> Result<bool, DomainError>;

    async fn count_by_sample(&self, sample_number: i32) -> Result<u64, DomainError>;

    async fn count_by_user(&self, id_user: i32) -> Result<u64, DomainError>;
}
