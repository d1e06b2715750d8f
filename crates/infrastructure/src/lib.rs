//! Infrastructure layer - Persistence and configuration

pub mod config;
pub mod database;

pub use config::ServerConfig;
pub use database::{
    SeaOrmAnalysisRepository, SeaOrmClientRepository, SeaOrmLabResultRepository,
    SeaOrmSampleRepository, SeaOrmTrialRepository, SeaOrmUserRepository,
};
