//! HTTP surface. Every resource exposes the same list/get/create/update/delete
//! shape; success payloads are wrapped in `{"data": ...}`.

mod analyses;
mod clients;
mod health;
mod login;
mod results;
mod samples;
mod trials;
mod users;

use crate::auth::bearer_middleware;
use crate::state::AppState;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router, middleware};
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/login", post(login::login))
        .route("/users", get(users::list).post(users::create))
        .route(
            "/users/{id}",
            get(users::get).patch(users::update).delete(users::delete),
        )
        .route("/clients", get(clients::list).post(clients::create))
        .route(
            "/clients/{client_code}",
            get(clients::get).patch(clients::update).delete(clients::delete),
        )
        .route("/client/{client_code}", get(clients::get))
        .route("/samples", get(samples::list).post(samples::create))
        .route(
            "/samples/{sample_number}",
            get(samples::get).patch(samples::update).delete(samples::delete),
        )
        .route("/analysis", get(analyses::list).post(analyses::create))
        .route(
            "/analysis/{analysis_number}",
            get(analyses::get).patch(analyses::update).delete(analyses::delete),
        )
        .route("/results", get(results::list).post(results::create))
        .route(
            "/results/{result_number}",
            get(results::get).patch(results::update).delete(results::delete),
        )
        .route("/trials", get(trials::list).post(trials::create))
        .route(
            "/trials/{trial_number}",
            get(trials::get).patch(trials::update).delete(trials::delete),
        )
        .layer(middleware::from_fn_with_state(state.clone(), bearer_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct Data<T> {
    pub data: T,
}

pub(crate) fn ok<T: Serialize>(data: T) -> Json<Data<T>> {
    Json(Data { data })
}

pub(crate) fn created<T: Serialize>(data: T) -> (StatusCode, Json<Data<T>>) {
    (StatusCode::CREATED, ok(data))
}

/// Unwrapped deletion acknowledgement, e.g. `{"deleted": true, "id": 3}`.
pub(crate) fn deleted(key: &str, value: impl Serialize) -> Json<Value> {
    let mut body = json!({ "deleted": true });
    body[key] = json!(value);
    Json(body)
}
