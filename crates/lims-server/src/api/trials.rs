use super::{Data, created, deleted, ok};
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath, Caller};
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use domain::trial::{CreateTrial, Trial, TrialPatch};
use serde_json::Value;
use std::sync::Arc;

pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Data<Vec<Trial>>>> {
    Ok(ok(state.trials.list().await?))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    ApiPath(trial_number): ApiPath<i32>,
) -> ApiResult<Json<Data<Trial>>> {
    Ok(ok(state.trials.get(trial_number).await?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Caller(claims): Caller,
    ApiJson(input): ApiJson<CreateTrial>,
) -> ApiResult<(StatusCode, Json<Data<Trial>>)> {
    let caller = claims.map(|c| c.user_id()).transpose()?;
    Ok(created(state.trials.create(input, caller).await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    ApiPath(trial_number): ApiPath<i32>,
    ApiJson(patch): ApiJson<TrialPatch>,
) -> ApiResult<Json<Data<Trial>>> {
    Ok(ok(state.trials.update(trial_number, patch).await?))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    ApiPath(trial_number): ApiPath<i32>,
) -> ApiResult<Json<Value>> {
    state.trials.delete(trial_number).await?;
    Ok(deleted("trial_number", trial_number))
}
