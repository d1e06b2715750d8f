mod entity;
mod repository;

pub use entity::{Analysis, AnalysisPatch, CreateAnalysis, NewAnalysis};
pub use repository::AnalysisRepository;
