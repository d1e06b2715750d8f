//! End-to-end service tests over the SeaORM repositories on in-memory SQLite.

use application::auth::{Argon2Hasher, TokenService};
use application::{
    AnalysisService, AuthService, ClientService, LabResultService, SampleService, TrialService,
    UserService,
};
use domain::DomainError;
use domain::analysis::CreateAnalysis;
use domain::client::{ClientCode, ClientPatch, CreateClient};
use domain::lab_result::CreateLabResult;
use domain::sample::NewSample;
use domain::trial::{CreateTrial, TrialPatch};
use domain::user::{CreateUser, Credentials, Role};
use infrastructure::config::DatabaseConfig;
use infrastructure::database::connect;
use infrastructure::{
    SeaOrmAnalysisRepository, SeaOrmClientRepository, SeaOrmLabResultRepository,
    SeaOrmSampleRepository, SeaOrmTrialRepository, SeaOrmUserRepository,
};
use serde_json::json;
use std::sync::Arc;

struct Services {
    auth: AuthService,
    users: UserService,
    clients: ClientService,
    samples: SampleService,
    analyses: AnalysisService,
    results: LabResultService,
    trials: TrialService,
}

async fn setup() -> Services {
    let db = connect(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    })
    .await
    .expect("Failed to open test database");

    let users = Arc::new(SeaOrmUserRepository::new(db.clone()));
    let clients = Arc::new(SeaOrmClientRepository::new(db.clone()));
    let samples = Arc::new(SeaOrmSampleRepository::new(db.clone()));
    let analyses = Arc::new(SeaOrmAnalysisRepository::new(db.clone()));
    let results = Arc::new(SeaOrmLabResultRepository::new(db.clone()));
    let trials = Arc::new(SeaOrmTrialRepository::new(db));
    let hasher = Arc::new(Argon2Hasher);

    Services {
        auth: AuthService::new(
            users.clone(),
            hasher.clone(),
            TokenService::new(Some("flow-test"), 3600),
        ),
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
        results: LabResultService::new(results.clone(), analyses.clone(), users.clone(), trials.clone()),
        trials: TrialService::new(trials, analyses, results, users),
    }
}

fn create_client(body: serde_json::Value) -> CreateClient {
    serde_json::from_value(body).unwrap()
}

#[tokio::test]
async fn test_client_codes_follow_sequence_and_are_not_reused() {
    let s = setup().await;

    let first = s
        .clients
        .create(create_client(json!({"name": "ACME", "contact": "Juan"})))
        .await
        .unwrap();
    assert_eq!(first.client_code.as_str(), "C-001");

    s.clients.delete(&first.client_code).await.unwrap();

    let second = s
        .clients
        .create(create_client(json!({"name": "Globex"})))
        .await
        .unwrap();
    assert_eq!(second.client_code.as_str(), "C-002");

    let missing = s.clients.get(&ClientCode::new("C-001").unwrap()).await;
    assert!(matches!(missing, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_client_fixture_shape_is_accepted() {
    let s = setup().await;

    let client = s
        .clients
        .create(create_client(json!({
            "client_code": 999,
            "name": "Fixture Farms",
            "phoneNumber": 5551234,
            "email": "farm@example.com",
            "addres": "Route 9",
        })))
        .await
        .unwrap();

    assert_eq!(client.client_code.as_str(), "999");
    assert_eq!(client.phone_number.as_deref(), Some("5551234"));
    assert_eq!(client.address.as_deref(), Some("Route 9"));

    let patched = s
        .clients
        .update(
            &client.client_code,
            ClientPatch {
                address: Some(String::new()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(patched.address.is_none());
    assert_eq!(s.clients.get(&client.client_code).await.unwrap(), patched);
}

#[tokio::test]
async fn test_full_laboratory_flow() {
    let s = setup().await;

    let analyst = s
        .users
        .create(CreateUser {
            name: "Luis".to_string(),
            username: "luis".to_string(),
            password: "bench-work".to_string(),
            roles: vec![Role::Analyst],
        })
        .await
        .unwrap();

    let login = s
        .auth
        .login(Credentials {
            username: "luis".to_string(),
            password: "bench-work".to_string(),
        })
        .await
        .unwrap();
    let caller = s.auth.verify_token(&login.access_token).unwrap().user_id().unwrap();
    assert_eq!(caller, analyst.id);

    let client = s
        .clients
        .create(create_client(json!({"name": "ACME"})))
        .await
        .unwrap();

    let sample: NewSample = serde_json::from_value(json!({
        "client_code": client.client_code.as_str(),
        "entry_date": "2025-06-02T09:00:00Z",
        "sampling_date": "2025-06-01T09:00:00Z",
        "description": "Topsoil",
    }))
    .unwrap();
    let sample = s.samples.create(sample).await.unwrap();
    assert_eq!(sample.analysis_quantity, 0);

    let analysis: CreateAnalysis = serde_json::from_value(json!({
        "id_user": analyst.id,
        "sample_number": sample.sample_number,
        "sow_date": "2025-06-03T09:00:00Z",
        "type_analysis": "Organic matter",
    }))
    .unwrap();
    let analysis = s.analyses.create(analysis).await.unwrap();
    assert_eq!(analysis.client_code, client.client_code);

    let result: CreateLabResult = serde_json::from_value(json!({
        "analysis_number": analysis.analysis_number,
        "id_user": analyst.id,
        "result_date": "2025-06-04T09:00:00Z",
        "result": "3.2 %",
    }))
    .unwrap();
    let result = s.results.create(result).await.unwrap();
    assert_eq!(result.sample_number, sample.sample_number);

    let trial: CreateTrial = serde_json::from_value(json!({
        "analysis_number": analysis.analysis_number,
        "sample_number": sample.sample_number,
        "result_number": result.result_number,
        "emission_date": "2025-06-05T09:00:00Z",
    }))
    .unwrap();
    let trial = s.trials.create(trial, Some(caller)).await.unwrap();
    assert_eq!(trial.id_user, analyst.id);
    assert_eq!(trial.id_role, Role::Analyst.id());
    assert_eq!(trial.client_code, client.client_code);

    // Everything upstream of the trial is now pinned
    assert!(matches!(
        s.results.delete(result.result_number).await,
        Err(DomainError::Conflict(_))
    ));
    assert!(matches!(
        s.users.delete(analyst.id).await,
        Err(DomainError::Conflict(_))
    ));
    assert!(matches!(
        s.clients.delete(&client.client_code).await,
        Err(DomainError::Conflict(_))
    ));

    let moved = s
        .trials
        .update(
            trial.trial_number,
            TrialPatch {
                emission_date: Some("2025-06-06T09:00:00Z".parse().unwrap()),
            },
        )
        .await
        .unwrap();
    assert_eq!(s.trials.get(trial.trial_number).await.unwrap(), moved);

    // Unwind in dependency order
    s.trials.delete(trial.trial_number).await.unwrap();
    s.results.delete(result.result_number).await.unwrap();
    s.analyses.delete(analysis.analysis_number).await.unwrap();
    s.samples.delete(sample.sample_number).await.unwrap();
    s.clients.delete(&client.client_code).await.unwrap();
    s.users.delete(analyst.id).await.unwrap();

    assert!(matches!(
        s.trials.get(trial.trial_number).await,
        Err(DomainError::NotFound { .. })
    ));
}
