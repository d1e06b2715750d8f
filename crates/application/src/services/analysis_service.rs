use super::{empty_patch, still_referenced};
use domain::DomainError;
use domain::analysis::{Analysis, AnalysisPatch, AnalysisRepository, CreateAnalysis};
use domain::lab_result::LabResultRepository;
use domain::sample::SampleRepository;
use domain::user::UserRepository;
use std::sync::Arc;
use tracing::info;

pub struct AnalysisService {
    analyses: Arc<dyn AnalysisRepository>,
    samples: Arc<dyn SampleRepository>,
    users: Arc<dyn UserRepository>,
    results: Arc<dyn LabResultRepository>,
}

impl AnalysisService {
    pub fn new(
        analyses: Arc<dyn AnalysisRepository>,
        samples: Arc<dyn SampleRepository>,
        users: Arc<dyn UserRepository>,
        results: Arc<dyn LabResultRepository>,
    ) -> Self {
        Self {
            analyses,
            samples,
            users,
            results,
        }
    }

    pub async fn list(&self) -> Result<Vec<Analysis>, DomainError> {
        self.analyses.find_all().await
    }

    pub async fn get(&self, analysis_number: i32) -> Result<Analysis, DomainError> {
        self.analyses
            .find_by_number(analysis_number)
            .await?
            .ok_or_else(|| DomainError::not_found("Analysis", analysis_number))
    }

    pub async fn create(&self, input: CreateAnalysis) -> Result<Analysis, DomainError> {
        let input = input.validate()?;

        if self.users.find_by_id(input.id_user).await?.is_none() {
            return Err(DomainError::conflict(format!("user {} does not exist", input.id_user)));
        }
        let sample = self
            .samples
            .find_by_number(input.sample_number)
            .await?
            .ok_or_else(|| {
                DomainError::conflict(format!("sample {} does not exist", input.sample_number))
            })?;

        let analysis = self.analyses.insert(&input.into_new(&sample)?).await?;
        info!(
            analysis_number = analysis.analysis_number,
            sample_number = analysis.sample_number,
            "Analysis created"
        );
        Ok(analysis)
    }

    pub async fn update(
        &self,
        analysis_number: i32,
        patch: AnalysisPatch,
    ) -> Result<Analysis, DomainError> {
        if patch.is_empty() {
            return Err(empty_patch());
        }
        let mut analysis = self.get(analysis_number).await?;
        patch.apply(&mut analysis)?;

        let analysis = self.analyses.update(&analysis).await?;
        info!(analysis_number, "Analysis updated");
        Ok(analysis)
    }

    pub async fn delete(&self, analysis_number: i32) -> Result<(), DomainError> {
        self.get(analysis_number).await?;

        let results = self.results.count_by_analysis(analysis_number).await?;
        if results > 0 {
            return Err(still_referenced("analysis", analysis_number, "results", results));
        }

        if !self.analyses.delete(analysis_number).await? {
            return Err(DomainError::not_found("Analysis", analysis_number));
        }
        info!(analysis_number, "Analysis deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mocks::{MockAnalyses, MockResults, MockSamples, MockUsers};
    use chrono::{TimeZone, Utc};
    use domain::client::ClientCode;
    use domain::sample::Sample;
    use domain::user::{Role, User};

    fn sample(n: i32) -> Sample {
        Sample {
            sample_number: n,
            client_code: ClientCode::new("999").unwrap(),
            entry_date: Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap(),
            description: "Water".to_string(),
            sampling_date: None,
            observations: None,
            analysis_quantity: 1,
        }
    }

    fn user(id: i32) -> User {
        User {
            id,
            name: "Luis".to_string(),
            username: "luis".to_string(),
            roles: vec![Role::Analyst],
            password_hash: String::new(),
        }
    }

    fn body(client_code: serde_json::Value) -> CreateAnalysis {
        serde_json::from_value(serde_json::json!({
            "id_user": 1,
            "sample_number": 5,
            "client_code": client_code,
            "sow_date": "2025-01-11T08:00:00Z",
            "type_analysis": "Nitrates",
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_takes_client_from_sample() {
        let mut users = MockUsers::new();
        users.expect_find_by_id().returning(|id| Ok(Some(user(id))));
        let mut samples = MockSamples::new();
        samples.expect_find_by_number().returning(|n| Ok(Some(sample(n))));
        let mut analyses = MockAnalyses::new();
        analyses
            .expect_insert()
            .withf(|a| a.client_code.as_str() == "999" && a.sample_number == 5)
            .returning(|a| {
                Ok(Analysis {
                    analysis_number: 1,
                    id_user: a.id_user,
                    sample_number: a.sample_number,
                    client_code: a.client_code.clone(),
                    sow_date: a.sow_date,
                    type_analysis: a.type_analysis.clone(),
                })
            });

        let service = AnalysisService::new(
            Arc::new(analyses),
            Arc::new(samples),
            Arc::new(users),
            Arc::new(MockResults::new()),
        );
        // Integer client codes are accepted on input
        let analysis = service.create(body(serde_json::json!(999))).await.unwrap();
        assert_eq!(analysis.client_code.as_str(), "999");
    }

    #[tokio::test]
    async fn test_create_with_mismatched_client_is_conflict() {
        let mut users = MockUsers::new();
        users.expect_find_by_id().returning(|id| Ok(Some(user(id))));
        let mut samples = MockSamples::new();
        samples.expect_find_by_number().returning(|n| Ok(Some(sample(n))));
        let mut analyses = MockAnalyses::new();
        analyses.expect_insert().never();

        let service = AnalysisService::new(
            Arc::new(analyses),
            Arc::new(samples),
            Arc::new(users),
            Arc::new(MockResults::new()),
        );
        let err = service.create(body(serde_json::json!("OTHER"))).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_create_for_unknown_user_is_conflict() {
        let mut users = MockUsers::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let service = AnalysisService::new(
            Arc::new(MockAnalyses::new()),
            Arc::new(MockSamples::new()),
            Arc::new(users),
            Arc::new(MockResults::new()),
        );
        let err = service.create(body(serde_json::Value::Null)).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_empty_patch_rejected() {
        let service = AnalysisService::new(
            Arc::new(MockAnalyses::new()),
            Arc::new(MockSamples::new()),
            Arc::new(MockUsers::new()),
            Arc::new(MockResults::new()),
        );
        let err = service.update(1, AnalysisPatch::default()).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
