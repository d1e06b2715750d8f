use super::{Data, created, deleted, ok};
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use domain::sample::{NewSample, Sample, SamplePatch};
use serde_json::Value;
use std::sync::Arc;

pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Data<Vec<Sample>>>> {
    Ok(ok(state.samples.list().await?))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    ApiPath(sample_number): ApiPath<i32>,
) -> ApiResult<Json<Data<Sample>>> {
    Ok(ok(state.samples.get(sample_number).await?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<NewSample>,
) -> ApiResult<(StatusCode, Json<Data<Sample>>)> {
    Ok(created(state.samples.create(input).await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    ApiPath(sample_number): ApiPath<i32>,
    ApiJson(patch): ApiJson<SamplePatch>,
) -> ApiResult<Json<Data<Sample>>> {
    Ok(ok(state.samples.update(sample_number, patch).await?))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    ApiPath(sample_number): ApiPath<i32>,
) -> ApiResult<Json<Value>> {
    state.samples.delete(sample_number).await?;
    Ok(deleted("sample_number", sample_number))
}
