use super::empty_patch;
use domain::DomainError;
use domain::analysis::AnalysisRepository;
use domain::lab_result::LabResultRepository;
use domain::trial::{CreateTrial, Trial, TrialPatch, TrialRepository};
use domain::user::UserRepository;
use std::sync::Arc;
use tracing::info;

pub struct TrialService {
    trials: Arc<dyn TrialRepository>,
    analyses: Arc<dyn AnalysisRepository>,
    results: Arc<dyn LabResultRepository>,
    users: Arc<dyn UserRepository>,
}

impl TrialService {
    pub fn new(
        trials: Arc<dyn TrialRepository>,
        analyses: Arc<dyn AnalysisRepository>,
        results: Arc<dyn LabResultRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            trials,
            analyses,
            results,
            users,
        }
    }

    pub async fn list(&self) -> Result<Vec<Trial>, DomainError> {
        self.trials.find_all().await
    }

    pub async fn get(&self, trial_number: i32) -> Result<Trial, DomainError> {
        self.trials
            .find_by_number(trial_number)
            .await?
            .ok_or_else(|| DomainError::not_found("Trial", trial_number))
    }

    /// Issue a trial. `caller` is the authenticated user, if any; it is the
    /// issuer when the body names none.
    pub async fn create(&self, input: CreateTrial, caller: Option<i32>) -> Result<Trial, DomainError> {
        let analysis = self
            .analyses
            .find_by_number(input.analysis_number)
            .await?
            .ok_or_else(|| {
                DomainError::conflict(format!("analysis {} does not exist", input.analysis_number))
            })?;
        let result = self
            .results
            .find_by_number(input.result_number)
            .await?
            .ok_or_else(|| {
                DomainError::conflict(format!("result {} does not exist", input.result_number))
            })?;

        let issuer_id = input.issuer_id(caller, &result);
        let issuer = self
            .users
            .find_by_id(issuer_id)
            .await?
            .ok_or_else(|| DomainError::conflict(format!("user {issuer_id} does not exist")))?;

        let trial = self
            .trials
            .insert(&input.into_new(&analysis, &result, &issuer)?)
            .await?;
        info!(
            trial_number = trial.trial_number,
            result_number = trial.result_number,
            id_user = trial.id_user,
            "Trial issued"
        );
        Ok(trial)
    }

    pub async fn update(&self, trial_number: i32, patch: TrialPatch) -> Result<Trial, DomainError> {
        if patch.is_empty() {
            return Err(empty_patch());
        }
        let mut trial = self.get(trial_number).await?;
        patch.apply(&mut trial);

        let trial = self.trials.update(&trial).await?;
        info!(trial_number, "Trial updated");
        Ok(trial)
    }

    pub async fn delete(&self, trial_number: i32) -> Result<(), DomainError> {
        if !self.trials.delete(trial_number).await? {
            return Err(DomainError::not_found("Trial", trial_number));
        }
        info!(trial_number, "Trial deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mocks::{MockAnalyses, MockResults, MockTrials, MockUsers};
    use chrono::{TimeZone, Utc};
    use domain::analysis::Analysis;
    use domain::client::ClientCode;
    use domain::lab_result::LabResult;
    use domain::user::{Role, User};

    fn analysis() -> Analysis {
        Analysis {
            analysis_number: 3,
            id_user: 1,
            sample_number: 2,
            client_code: ClientCode::new("ACME").unwrap(),
            sow_date: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            type_analysis: "pH".to_string(),
        }
    }

    fn result() -> LabResult {
        LabResult {
            result_number: 4,
            analysis_number: 3,
            sample_number: 2,
            id_user: 1,
            client_code: ClientCode::new("ACME").unwrap(),
            result_date: Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap(),
            result: "7.1".to_string(),
        }
    }

    fn user(id: i32, roles: Vec<Role>) -> User {
        User {
            id,
            name: format!("user {id}"),
            username: format!("user{id}"),
            roles,
            password_hash: String::new(),
        }
    }

    fn body() -> CreateTrial {
        serde_json::from_value(serde_json::json!({
            "analysis_number": 3,
            "sample_number": 2,
            "result_number": 4,
            "emission_date": "2025-01-03T00:00:00Z",
        }))
        .unwrap()
    }

    fn service(users: MockUsers, trials: MockTrials) -> TrialService {
        let mut analyses = MockAnalyses::new();
        analyses.expect_find_by_number().returning(|_| Ok(Some(analysis())));
        let mut results = MockResults::new();
        results.expect_find_by_number().returning(|_| Ok(Some(result())));
        TrialService::new(Arc::new(trials), Arc::new(analyses), Arc::new(results), Arc::new(users))
    }

    fn echo_insert(trials: &mut MockTrials) {
        trials.expect_insert().returning(|t| {
            Ok(Trial {
                trial_number: 1,
                analysis_number: t.analysis_number,
                sample_number: t.sample_number,
                result_number: t.result_number,
                id_role: t.id_role,
                id_user: t.id_user,
                client_code: t.client_code.clone(),
                emission_date: t.emission_date,
            })
        });
    }

    #[tokio::test]
    async fn test_caller_issues_with_primary_role() {
        let mut users = MockUsers::new();
        users
            .expect_find_by_id()
            .withf(|id| *id == 9)
            .returning(|id| Ok(Some(user(id, vec![Role::Analyst, Role::Supervisor]))));
        let mut trials = MockTrials::new();
        echo_insert(&mut trials);

        let trial = service(users, trials).create(body(), Some(9)).await.unwrap();
        assert_eq!(trial.id_user, 9);
        assert_eq!(trial.id_role, Role::Supervisor.id());
        assert_eq!(trial.client_code.as_str(), "ACME");
    }

    #[tokio::test]
    async fn test_result_author_issues_without_caller() {
        let mut users = MockUsers::new();
        users
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .returning(|id| Ok(Some(user(id, vec![Role::Receptionist]))));
        let mut trials = MockTrials::new();
        echo_insert(&mut trials);

        let trial = service(users, trials).create(body(), None).await.unwrap();
        assert_eq!(trial.id_user, 1);
        assert_eq!(trial.id_role, 4);
    }

    #[tokio::test]
    async fn test_wrong_sample_is_conflict() {
        let mut users = MockUsers::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(user(id, vec![Role::Admin]))));
        let mut trials = MockTrials::new();
        trials.expect_insert().never();

        let mut input = body();
        input.sample_number = 77;
        let err = service(users, trials).create(input, None).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut trials = MockTrials::new();
        trials.expect_delete().returning(|_| Ok(false));

        let err = service(MockUsers::new(), trials).delete(12).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_empty_patch_rejected() {
        let mut trials = MockTrials::new();
        trials.expect_update().never();
        let service = service(MockUsers::new(), trials);
        let err = service.update(1, TrialPatch::default()).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
