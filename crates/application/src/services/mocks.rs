use crate::auth::PasswordHasher;
use async_trait::async_trait;
use domain::DomainError;
use domain::analysis::{Analysis, AnalysisRepository, NewAnalysis};
use domain::client::{Client, ClientCode, ClientRepository};
use domain::lab_result::{LabResult, LabResultRepository, NewLabResult};
use domain::sample::{NewSample, Sample, SampleRepository};
use domain::trial::{NewTrial, Trial, TrialRepository};
use domain::user::{NewUser, User, UserRepository};
use mockall::mock;

mock! {
    pub Users {}

    #[async_trait]
    impl UserRepository for Users {
        async fn find_all(&self) -> Result<Vec<User>, DomainError>;
        async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError>;
        async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
        async fn insert(&self, user: &NewUser) -> Result<User, DomainError>;
        async fn update(&self, user: &User) -> Result<User, DomainError>;
        async fn delete(&self, id: i32) -> Result<bool, DomainError>;
    }
}

mock! {
    pub Clients {}

    #[async_trait]
    impl ClientRepository for Clients {
        async fn find_all(&self) -> Result<Vec<Client>, DomainError>;
        async fn find_by_code(&self, code: &ClientCode) -> Result<Option<Client>, DomainError>;
        async fn insert(&self, client: &Client) -> Result<Client, DomainError>;
        async fn update(&self, client: &Client) -> Result<Client, DomainError>;
        async fn delete(&self, code: &ClientCode) -> Result<bool, DomainError>;
        async fn next_sequence(&self) -> Result<i64, DomainError>;
    }
}

mock! {
    pub Samples {}

    #[async_trait]
    impl SampleRepository for Samples {
        async fn find_all(&self) -> Result<Vec<Sample>, DomainError>;
        async fn find_by_number(&self, sample_number: i32) -> Result<Option<Sample>, DomainError>;
        async fn insert(&self, sample: &NewSample) -> Result<Sample, DomainError>;
        async fn update(&self, sample: &Sample) -> Result<Sample, DomainError>;
        async fn delete(&self, sample_number: i32) -> Result<bool, DomainError>;
        async fn count_by_client(&self, code: &ClientCode) -> Result<u64, DomainError>;
    }
}

mock! {
    pub Analyses {}

    #[async_trait]
    impl AnalysisRepository for Analyses {
        async fn find_all(&self) -> Result<Vec<Analysis>, DomainError>;
        async fn find_by_number(&self, analysis_number: i32) -> Result<Option<Analysis>, DomainError>;
        async fn insert(&self, analysis: &NewAnalysis) -> Result<Analysis, DomainError>;
        async fn update(&self, analysis: &Analysis) -> Result<Analysis, DomainError>;
        async fn delete(&self, analysis_number: i32) -> Result<bool, DomainError>;
        async fn count_by_sample(&self, sample_number: i32) -> Result<u64, DomainError>;
        async fn count_by_user(&self, id_user: i32) -> Result<u64, DomainError>;
    }
}

mock! {
    pub Results {}

    #[async_trait]
    impl LabResultRepository for Results {
        async fn find_all(&self) -> Result<Vec<LabResult>, DomainError>;
        async fn find_by_number(&self, result_number: i32) -> Result<Option<LabResult>, DomainError>;
        async fn insert(&self, result: &NewLabResult) -> Result<LabResult, DomainError>;
        async fn update(&self, result: &LabResult) -> Result<LabResult, DomainError>;
        async fn delete(&self, result_number: i32) -> Result<bool, DomainError>;
        async fn count_by_analysis(&self, analysis_number: i32) -> Result<u64, DomainError>;
        async fn count_by_user(&self, id_user: i32) -> Result<u64, DomainError>;
    }
}

mock! {
    pub Trials {}

    #[async_trait]
    impl TrialRepository for Trials {
        async fn find_all(&self) -> Result<Vec<Trial>, DomainError>;
        async fn find_by_number(&self, trial_number: i32) -> Result<Option<Trial>, DomainError>;
        async fn insert(&self, trial: &NewTrial) -> Result<Trial, DomainError>;
        async fn update(&self, trial: &Trial) -> Result<Trial, DomainError>;
        async fn delete(&self, trial_number: i32) -> Result<bool, DomainError>;
        async fn count_by_result(&self, result_number: i32) -> Result<u64, DomainError>;
        async fn count_by_user(&self, id_user: i32) -> Result<u64, DomainError>;
    }
}

/// Reversible stand-in so tests don't pay for Argon2.
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        Ok(format!("plain:{password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        Ok(hash == format!("plain:{password}"))
    }
}
