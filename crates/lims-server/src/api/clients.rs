use super::{Data, created, deleted, ok};
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use domain::DomainError;
use domain::client::{Client, ClientCode, ClientPatch, CreateClient};
use serde_json::Value;
use std::sync::Arc;

/// A code that fails validation cannot name a stored client.
fn parse_code(raw: String) -> Result<ClientCode, DomainError> {
    ClientCode::new(raw.as_str()).map_err(|_| DomainError::not_found("Client", raw))
}

pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Data<Vec<Client>>>> {
    Ok(ok(state.clients.list().await?))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    ApiPath(code): ApiPath<String>,
) -> ApiResult<Json<Data<Client>>> {
    let code = parse_code(code)?;
    Ok(ok(state.clients.get(&code).await?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<CreateClient>,
) -> ApiResult<(StatusCode, Json<Data<Client>>)> {
    Ok(created(state.clients.create(input).await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    ApiPath(code): ApiPath<String>,
    ApiJson(patch): ApiJson<ClientPatch>,
) -> ApiResult<Json<Data<Client>>> {
    let code = parse_code(code)?;
    Ok(ok(state.clients.update(&code, patch).await?))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    ApiPath(code): ApiPath<String>,
) -> ApiResult<Json<Value>> {
    let code = parse_code(code)?;
    state.clients.delete(&code).await?;
    Ok(deleted("client_code", code.as_str()))
}
