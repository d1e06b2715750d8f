mod client_code;
mod entity;
mod repository;

pub use client_code::ClientCode;
pub use entity::{Client, ClientPatch, CreateClient};
pub use repository::ClientRepository;
