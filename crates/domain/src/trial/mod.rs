mod entity;
mod repository;

pub use entity::{CreateTrial, NewTrial, Trial, TrialPatch};
pub use repository::TrialRepository;
