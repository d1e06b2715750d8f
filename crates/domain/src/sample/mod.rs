mod entity;
mod repository;

pub use entity::{NewSample, Sample, SamplePatch};
pub use repository::SampleRepository;
