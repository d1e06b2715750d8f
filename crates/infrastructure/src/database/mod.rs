mod analysis_repository;
mod client_repository;
mod result_repository;
mod sample_repository;
mod trial_repository;
mod user_repository;

pub mod entities;

use crate::config::DatabaseConfig;
use chrono::{DateTime, FixedOffset, Utc};
use domain::DomainError;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, SqlErr};
use tracing::info;

pub use analysis_repository::SeaOrmAnalysisRepository;
pub use client_repository::SeaOrmClientRepository;
pub use result_repository::SeaOrmLabResultRepository;
pub use sample_repository::SeaOrmSampleRepository;
pub use trial_repository::SeaOrmTrialRepository;
pub use user_repository::SeaOrmUserRepository;

/// Open the configured database and bring its schema up to date.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    info!("Running database migrations...");
    Migrator::up(&db, None).await?;
    info!("✅ Migrations applied successfully");
    Ok(db)
}

/// Constraint violations surface as conflicts; everything else is a
/// repository failure.
pub(crate) fn db_error(err: DbErr) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => {
            DomainError::Conflict(format!("Duplicate record: {}", msg))
        }
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            DomainError::Conflict(format!("Referenced record missing or in use: {}", msg))
        }
        _ => DomainError::Repository(format!("Database error: {}", err)),
    }
}

pub(crate) fn to_offset(dt: DateTime<Utc>) -> DateTime<FixedOffset> {
    dt.fixed_offset()
}

pub(crate) fn to_utc(dt: DateTime<FixedOffset>) -> DateTime<Utc> {
    dt.with_timezone(&Utc)
}

pub(crate) fn parse_client_code(raw: String) -> Result<domain::ClientCode, DomainError> {
    domain::ClientCode::new(raw)
        .map_err(|e| DomainError::Repository(format!("Stored client_code is invalid: {}", e)))
}
