//! One service per resource. Services own the cross-record rules
//! (references on create, references blocking delete); field rules live
//! on the domain input types.

mod analysis_service;
mod client_service;
mod result_service;
mod sample_service;
mod trial_service;
mod user_service;

pub use analysis_service::AnalysisService;
pub use client_service::ClientService;
pub use result_service::LabResultService;
pub use sample_service::SampleService;
pub use trial_service::TrialService;
pub use user_service::UserService;

use domain::DomainError;

pub(crate) fn empty_patch() -> DomainError {
    DomainError::validation("update body must contain at least one field")
}

pub(crate) fn still_referenced(what: &str, key: impl std::fmt::Display, by: &str, count: u64) -> DomainError {
    DomainError::conflict(format!("{what} {key} is still referenced by {count} {by}"))
}

#[cfg(test)]
pub(crate) mod mocks;
