use super::{NewSample, Sample};
use crate::DomainError;
use crate::client::ClientCode;
use async_trait::async_trait;

#[async_trait]
pub trait SampleRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Sample>, DomainError>;

    async fn find_by_number(&self, sample_number: i32) -> Result<Option<Sample>, DomainError>;

    async fn insert(&self, sample: &NewSample) -> Result<Sample, DomainError>;

    async fn update(&self, sample: &Sample) -> Result<Sample, DomainError>;

    async fn delete(&self, sample_number: i32) -> Result<bool, DomainError>;

    /// Number of samples registered against a client
    async fn count_by_client(&self, code: &ClientCode) -> Result<u64, DomainError>;
}
