use super::{Client, ClientCode};
use crate::DomainError;
use async_trait::async_trait;

/// Repository interface for Client persistence
///
/// Implementations should be provided in the infrastructure layer.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Client>, DomainError>;

    async fn find_by_code(&self, code: &ClientCode) -> Result<Option<Client>, DomainError>;

    /// Insert a new client. A duplicate code is reported as `Conflict`.
    async fn insert(&self, client: &Client) -> Result<Client, DomainError>;

    async fn update(&self, client: &Client) -> Result<Client, DomainError>;

    /// Returns `false` when no client had that code.
    async fn delete(&self, code: &ClientCode) -> Result<bool, DomainError>;

    /// Next value of the persistent client-code sequence. Never repeats.
    async fn next_sequence(&self) -> Result<i64, DomainError>;
}
