mod entity;
mod repository;
mod role;

pub use entity::{CreateUser, Credentials, MIN_PASSWORD_LEN, NewUser, User, UserPatch};
pub use repository::UserRepository;
pub use role::Role;
