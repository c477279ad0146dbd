//! Client storage provider trait.

use async_trait::async_trait;
use kc_model::Client;
use uuid::Uuid;

use crate::error::StorageResult;

/// Provider for client storage operations.
///
/// Implementations must be thread-safe and support concurrent access.
/// Lookups reflect whatever the backend holds at call time.
#[async_trait]
pub trait ClientProvider: Send + Sync {
    /// Creates a new client.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::Duplicate` if a client with the same `client_id` exists.
    async fn create(&self, client: &Client) -> StorageResult<()>;

    /// Updates an existing client.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::NotFound` if the client doesn't exist.
    async fn update(&self, client: &Client) -> StorageResult<()>;

    /// Deletes a client by internal ID.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::NotFound` if the client doesn't exist.
    async fn delete(&self, id: Uuid) -> StorageResult<()>;

    /// Gets a client by `client_id`, regardless of its enabled flag.
    async fn get_by_client_id(&self, client_id: &str) -> StorageResult<Option<Client>>;

    /// Gets a client by `client_id`, returning `None` for disabled clients.
    async fn find_enabled_by_client_id(&self, client_id: &str) -> StorageResult<Option<Client>> {
        Ok(self
            .get_by_client_id(client_id)
            .await?
            .filter(|client| client.enabled))
    }

    /// Gets all clients.
    async fn list(&self) -> StorageResult<Vec<Client>>;
}
