use super::{Data, ok};
use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::state::AppState;
use application::auth::LoginResponse;
use axum::Json;
use axum::extract::State;
use domain::user::Credentials;
use std::sync::Arc;

pub async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(credentials): ApiJson<Credentials>,
) -> ApiResult<Json<Data<LoginResponse>>> {
    Ok(ok(state.auth.login(credentials).await?))
}
