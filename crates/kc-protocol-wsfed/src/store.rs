//! Relying party registrations.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::config::WsFederationConfig;
use crate::error::WsFedResult;
use crate::types::RelyingParty;

/// Provider for relying party token settings.
///
/// Implementations must be thread-safe and support concurrent access.
#[async_trait]
pub trait RelyingPartyProvider: Send + Sync {
    /// Finds the settings registered for a realm.
    async fn find_by_realm(&self, realm: &str) -> WsFedResult<Option<RelyingParty>>;
}

/// Resolves the settings for a realm, falling back to configuration
/// defaults when the realm has no registration.
///
/// # Errors
///
/// Returns an error only if the provider itself fails.
pub async fn resolve_relying_party<P>(
    provider: &P,
    realm: &str,
    config: &WsFederationConfig,
) -> WsFedResult<RelyingParty>
where
    P: RelyingPartyProvider + ?Sized,
{
    match provider.find_by_realm(realm).await? {
        Some(relying_party) => Ok(relying_party),
        None => {
            tracing::debug!(realm, "no relying party registered, using defaults");
            Ok(RelyingParty::from_defaults(realm, config))
        }
    }
}

/// In-memory relying party store keyed by realm.
pub struct InMemoryRelyingPartyProvider {
    relying_parties: RwLock<HashMap<String, RelyingParty>>,
}

impl InMemoryRelyingPartyProvider {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            relying_parties: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a store pre-populated with the given registrations.
    #[must_use]
    pub fn with_relying_parties(relying_parties: impl IntoIterator<Item = RelyingParty>) -> Self {
        let relying_parties = relying_parties
            .into_iter()
            .map(|rp| (rp.realm.clone(), rp))
            .collect();
        Self {
            relying_parties: RwLock::new(relying_parties),
        }
    }

    /// Registers or replaces the settings for a realm.
    pub async fn upsert(&self, relying_party: RelyingParty) {
        self.relying_parties
            .write()
            .await
            .insert(relying_party.realm.clone(), relying_party);
    }

    /// Removes the settings for a realm. Returns true if one existed.
    pub async fn remove(&self, realm: &str) -> bool {
        self.relying_parties.write().await.remove(realm).is_some()
    }
}

impl Default for InMemoryRelyingPartyProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RelyingPartyProvider for InMemoryRelyingPartyProvider {
    async fn find_by_realm(&self, realm: &str) -> WsFedResult<Option<RelyingParty>> {
        Ok(self.relying_parties.read().await.get(realm).cloned())
    }
}
