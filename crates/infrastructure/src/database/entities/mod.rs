pub mod analyses;
pub mod clients;
pub mod results;
pub mod samples;
pub mod sequences;
pub mod trials;
pub mod users;
