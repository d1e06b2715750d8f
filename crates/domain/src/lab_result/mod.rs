mod entity;
mod repository;

pub use entity::{CreateLabResult, LabResult, LabResultPatch, NewLabResult};
pub use repository::LabResultRepository;
