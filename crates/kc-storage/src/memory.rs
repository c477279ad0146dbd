//! In-memory storage providers.
//!
//! Suitable for single-instance deployments or testing. Production
//! deployments with multiple instances should use a shared backend.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use kc_model::Client;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::client::ClientProvider;
use crate::error::{StorageError, StorageResult};

/// In-memory client store keyed by `client_id`.
pub struct InMemoryClientProvider {
    clients: RwLock<HashMap<String, Client>>,
}

impl InMemoryClientProvider {
    /// Creates an empty client store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clients: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a store pre-populated with the given clients.
    ///
    /// Later entries replace earlier ones with the same `client_id`.
    #[must_use]
    pub fn with_clients(clients: impl IntoIterator<Item = Client>) -> Self {
        let clients = clients
            .into_iter()
            .map(|client| (client.client_id.clone(), client))
            .collect();
        Self {
            clients: RwLock::new(clients),
        }
    }
}

impl Default for InMemoryClientProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClientProvider for InMemoryClientProvider {
    async fn create(&self, client: &Client) -> StorageResult<()> {
        let mut clients = self.clients.write().await;
        if clients.contains_key(&client.client_id) {
            return Err(StorageError::duplicate(
                "Client",
                "client_id",
                client.client_id.clone(),
            ));
        }
        clients.insert(client.client_id.clone(), client.clone());
        Ok(())
    }

    async fn update(&self, client: &Client) -> StorageResult<()> {
        let mut clients = self.clients.write().await;

        // client_id may have been renamed, so match on the internal id
        let previous_key = clients
            .iter()
            .find(|(_, stored)| stored.id == client.id)
            .map(|(key, _)| key.clone())
            .ok_or_else(|| StorageError::not_found("Client", client.id))?;

        if previous_key != client.client_id && clients.contains_key(&client.client_id) {
            return Err(StorageError::duplicate(
                "Client",
                "client_id",
                client.client_id.clone(),
            ));
        }

        clients.remove(&previous_key);
        let mut updated = client.clone();
        updated.updated_at = Utc::now();
        clients.insert(updated.client_id.clone(), updated);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> StorageResult<()> {
        let mut clients = self.clients.write().await;
        let before = clients.len();
        clients.retain(|_, client| client.id != id);
        if clients.len() == before {
            return Err(StorageError::not_found("Client", id));
        }
        Ok(())
    }

    async fn get_by_client_id(&self, client_id: &str) -> StorageResult<Option<Client>> {
        Ok(self.clients.read().await.get(client_id).cloned())
    }

    async fn list(&self) -> StorageResult<Vec<Client>> {
        let mut clients: Vec<Client> = self.clients.read().await.values().cloned().collect();
        clients.sort_by(|a, b| a.client_id.cmp(&b.client_id));
        Ok(clients)
    }
}
