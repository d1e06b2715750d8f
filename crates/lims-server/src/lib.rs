pub mod api;
pub mod auth;
pub mod error;
pub mod extract;
pub mod state;

use infrastructure::config::AuthConfig;
use sea_orm::DatabaseConnection;
use state::AppState;
use std::sync::Arc;

pub async fn setup_app_state(db: DatabaseConnection, auth: &AuthConfig) -> Arc<AppState> {
    let state = Arc::new(AppState::new(db, auth));

    if let Some(admin) = &auth.bootstrap_admin {
        if let Err(e) = state
            .auth
            .ensure_bootstrap_admin(&admin.username, &admin.password, &admin.name)
            .await
        {
            tracing::warn!("Failed to create bootstrap admin: {}", e);
        }
    }

    state
}
