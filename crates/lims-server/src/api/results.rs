use super::{Data, created, deleted, ok};
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use domain::lab_result::{CreateLabResult, LabResult, LabResultPatch};
use serde_json::Value;
use std::sync::Arc;

pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Data<Vec<LabResult>>>> {
    Ok(ok(state.results.list().await?))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    ApiPath(result_number): ApiPath<i32>,
) -> ApiResult<Json<Data<LabResult>>> {
    Ok(ok(state.results.get(result_number).await?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<CreateLabResult>,
) -> ApiResult<(StatusCode, Json<Data<LabResult>>)> {
    Ok(created(state.results.create(input).await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    ApiPath(result_number): ApiPath<i32>,
    ApiJson(patch): ApiJson<LabResultPatch>,
) -> ApiResult<Json<Data<LabResult>>> {
    Ok(ok(state.results.update(result_number, patch).await?))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    ApiPath(result_number): ApiPath<i32>,
) -> ApiResult<Json<Value>> {
    state.results.delete(result_number).await?;
    Ok(deleted("result_number", result_number))
}
