use super::{Data, created, deleted, ok};
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use domain::analysis::{Analysis, AnalysisPatch, CreateAnalysis};
use serde_json::Value;
use std::sync::Arc;

pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Data<Vec<Analysis>>>> {
    Ok(ok(state.analyses.list().await?))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    ApiPath(analysis_number): ApiPath<i32>,
) -> ApiResult<Json<Data<Analysis>>> {
    Ok(ok(state.analyses.get(analysis_number).await?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<CreateAnalysis>,
) -> ApiResult<(StatusCode, Json<Data<Analysis>>)> {
    Ok(created(state.analyses.create(input).await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    ApiPath(analysis_number): ApiPath<i32>,
    ApiJson(patch): ApiJson<AnalysisPatch>,
) -> ApiResult<Json<Data<Analysis>>> {
    Ok(ok(state.analyses.update(analysis_number, patch).await?))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    ApiPath(analysis_number): ApiPath<i32>,
) -> ApiResult<Json<Value>> {
    state.analyses.delete(analysis_number).await?;
    Ok(deleted("analysis_number", analysis_number))
}
