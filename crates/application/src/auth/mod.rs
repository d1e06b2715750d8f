//! Login, password hashing and bearer tokens

mod password;
mod service;
mod token;

pub use password::{Argon2Hasher, PasswordHasher};
pub use service::{AuthService, LoginResponse, UserSummary};
pub use token::{Claims, TokenService};
