use application::auth::{Argon2Hasher, PasswordHasher};
use application::{
    AnalysisService, AuthService, ClientService, LabResultService, SampleService, TokenService,
    TrialService, UserService,
};
use domain::analysis::AnalysisRepository;
use domain::client::ClientRepository;
use domain::lab_result::LabResultRepository;
use domain::sample::SampleRepository;
use domain::trial::TrialRepository;
use domain::user::UserRepository;
use infrastructure::config::AuthConfig;
use infrastructure::{
    SeaOrmAnalysisRepository, SeaOrmClientRepository, SeaOrmLabResultRepository,
    SeaOrmSampleRepository, SeaOrmTrialRepository, SeaOrmUserRepository,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub struct AppState {
    pub db: DatabaseConnection,
    pub auth: AuthService,
    pub users: UserService,
    pub clients: ClientService,
    pub samples: SampleService,
    pub analyses: AnalysisService,
    pub results: LabResultService,
    pub trials: TrialService,
    /// Reject token-less requests outside the public routes
    pub require_token: bool,
}

impl AppState {
    pub fn new(db: DatabaseConnection, auth: &AuthConfig) -> Self {
        let users: Arc<dyn UserRepository> =
            Arc::new(SeaOrmUserRepository::new(db.clone()));
        let clients: Arc<dyn ClientRepository> =
            Arc::new(SeaOrmClientRepository::new(db.clone()));
        let samples: Arc<dyn SampleRepository> =
            Arc::new(SeaOrmSampleRepository::new(db.clone()));
        let analyses: Arc<dyn AnalysisRepository> =
            Arc::new(SeaOrmAnalysisRepository::new(db.clone()));
        let results: Arc<dyn LabResultRepository> =
            Arc::new(SeaOrmLabResultRepository::new(db.clone()));
        let trials: Arc<dyn TrialRepository> =
            Arc::new(SeaOrmTrialRepository::new(db.clone()));
        let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher);

        let tokens = TokenService::new(auth.jwt_secret.as_deref(), auth.token_ttl_secs);

        Self {
            auth: AuthService::new(users.clone(), hasher.clone(), tokens),
            users: UserService::new(
                users.clone(),
                analyses.clone(),
                results.clone(),
                trials.clone(),
                hasher,
            ),
            clients: ClientService::new(clients.clone(), samples.clone()),
            samples: SampleService::new(samples.clone(), clients, analyses.clone()),
            analyses: AnalysisService::new(
                analyses.clone(),
                samples,
                users.clone(),
                results.clone(),
            ),
            results: LabResultService::new(
                results.clone(),
                analyses.clone(),
                users.clone(),
                trials.clone(),
            ),
            trials: TrialService::new(trials, analyses, results, users),
            require_token: auth.require_token,
            db,
        }
    }
}
