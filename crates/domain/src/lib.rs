//! Domain layer - Laboratory records and their rules
//!
//! This crate contains:
//! - Entities (User, Client, Sample, Analysis, LabResult, Trial)
//! - Value Objects (ClientCode, Role)
//! - Request bodies with their validation and patch semantics
//! - Repository interfaces (traits)
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Business rules enforced at domain level
//! - Testable in isolation

pub mod analysis;
pub mod client;
pub mod error;
pub mod lab_result;
pub mod sample;
pub mod trial;
pub mod user;
pub mod validation;
mod wire;

// Re-export commonly used types
pub use analysis::Analysis;
pub use client::{Client, ClientCode};
pub use error::{DomainError, Result};
pub use lab_result::LabResult;
pub use sample::Sample;
pub use trial::Trial;
pub use user::{Role, User};
