use super::{Data, created, deleted, ok};
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use domain::user::{CreateUser, User, UserPatch};
use serde_json::Value;
use std::sync::Arc;

pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Data<Vec<User>>>> {
    Ok(ok(state.users.list().await?))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<Data<User>>> {
    Ok(ok(state.users.get(id).await?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<CreateUser>,
) -> ApiResult<(StatusCode, Json<Data<User>>)> {
    Ok(created(state.users.create(input).await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(patch): ApiJson<UserPatch>,
) -> ApiResult<Json<Data<User>>> {
    Ok(ok(state.users.update(id, patch).await?))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<Value>> {
    state.users.delete(id).await?;
    Ok(deleted("id", id))
}
