//! Application layer - Use cases over the laboratory records

pub mod auth;
pub mod services;

pub use auth::{AuthService, Claims, TokenService};
pub use services::{
    AnalysisService, ClientService, LabResultService, SampleService, TrialService, UserService,
};
