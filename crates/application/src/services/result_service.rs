use super::{empty_patch, still_referenced};
use domain::DomainError;
use domain::analysis::AnalysisRepository;
use domain::lab_result::{CreateLabResult, LabResult, LabResultPatch, LabResultRepository};
use domain::trial::TrialRepository;
use domain::user::UserRepository;
use std::sync::Arc;
use tracing::info;

pub struct LabResultService {
    results: Arc<dyn LabResultRepository>,
    analyses: Arc<dyn AnalysisRepository>,
    users: Arc<dyn UserRepository>,
    trials: Arc<dyn TrialRepository>,
}

impl LabResultService {
    pub fn new(
        results: Arc<dyn LabResultRepository>,
        analyses: Arc<dyn AnalysisRepository>,
        users: Arc<dyn UserRepository>,
        trials: Arc<dyn TrialRepository>,
    ) -> Self {
        Self {
            results,
            analyses,
            users,
            trials,
        }
    }

    pub async fn list(&self) -> Result<Vec<LabResult>, DomainError> {
        self.results.find_all().await
    }

    pub async fn get(&self, result_number: i32) -> Result<LabResult, DomainError> {
        self.results
            .find_by_number(result_number)
            .await?
            .ok_or_else(|| DomainError::not_found("Result", result_number))
    }

    pub async fn create(&self, input: CreateLabResult) -> Result<LabResult, DomainError> {
        let input = input.validate()?;

        let analysis = self
            .analyses
            .find_by_number(input.analysis_number)
            .await?
            .ok_or_else(|| {
                DomainError::conflict(format!("analysis {} does not exist", input.analysis_number))
            })?;
        if self.users.find_by_id(input.id_user).await?.is_none() {
            return Err(DomainError::conflict(format!("user {} does not exist", input.id_user)));
        }

        let result = self.results.insert(&input.into_new(&analysis)?).await?;
        info!(
            result_number = result.result_number,
            analysis_number = result.analysis_number,
            "Result recorded"
        );
        Ok(result)
    }

    pub async fn update(
        &self,
        result_number: i32,
        patch: LabResultPatch,
    ) -> Result<LabResult, DomainError> {
        if patch.is_empty() {
            return Err(empty_patch());
        }
        let mut result = self.get(result_number).await?;
        patch.apply(&mut result)?;

        let result = self.results.update(&result).await?;
        info!(result_number, "Result updated");
        Ok(result)
    }

    pub async fn delete(&self, result_number: i32) -> Result<(), DomainError> {
        self.get(result_number).await?;

        let trials = self.trials.count_by_result(result_number).await?;
        if trials > 0 {
            return Err(still_referenced("result", result_number, "trials", trials));
        }

        if !self.results.delete(result_number).await? {
            return Err(DomainError::not_found("Result", result_number));
        }
        info!(result_number, "Result deleted");
        Ok(())
    }
}
