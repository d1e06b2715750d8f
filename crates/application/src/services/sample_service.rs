use super::{empty_patch, still_referenced};
use domain::DomainError;
use domain::analysis::AnalysisRepository;
use domain::client::ClientRepository;
use domain::sample::{NewSample, Sample, SamplePatch, SampleRepository};
use std::sync::Arc;
use tracing::info;

pub struct SampleService {
    samples: Arc<dyn SampleRepository>,
    clients: Arc<dyn ClientRepository>,
    analyses: Arc<dyn AnalysisRepository>,
}

impl SampleService {
    pub fn new(
        samples: Arc<dyn SampleRepository>,
        clients: Arc<dyn ClientRepository>,
        analyses: Arc<dyn AnalysisRepository>,
    ) -> Self {
        Self {
            samples,
            clients,
            analyses,
        }
    }

    pub async fn list(&self) -> Result<Vec<Sample>, DomainError> {
        self.samples.find_all().await
    }

    pub async fn get(&self, sample_number: i32) -> Result<Sample, DomainError> {
        self.samples
            .find_by_number(sample_number)
            .await?
            .ok_or_else(|| DomainError::not_found("Sample", sample_number))
    }

    pub async fn create(&self, input: NewSample) -> Result<Sample, DomainError> {
        let input = input.validate()?;
        if self.clients.find_by_code(&input.client_code).await?.is_none() {
            return Err(DomainError::conflict(format!(
                "client {} does not exist",
                input.client_code
            )));
        }

        let sample = self.samples.insert(&input).await?;
        info!(
            sample_number = sample.sample_number,
            client_code = %sample.client_code,
            "Sample registered"
        );
        Ok(sample)
    }

    pub async fn update(&self, sample_number: i32, patch: SamplePatch) -> Result<Sample, DomainError> {
        if patch.is_empty() {
            return Err(empty_patch());
        }
        let mut sample = self.get(sample_number).await?;
        patch.apply(&mut sample)?;

        let sample = self.samples.update(&sample).await?;
        info!(sample_number, "Sample updated");
        Ok(sample)
    }

    pub async fn delete(&self, sample_number: i32) -> Result<(), DomainError> {
        self.get(sample_number).await?;

        let analyses = self.analyses.count_by_sample(sample_number).await?;
        if analyses > 0 {
            return Err(still_referenced("sample", sample_number, "analyses", analyses));
        }

        if !self.samples.delete(sample_number).await? {
            return Err(DomainError::not_found("Sample", sample_number));
        }
        info!(sample_number, "Sample deleted");
        Ok(())
    }
}
