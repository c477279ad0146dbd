//! Relying party token settings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::constants::token_types;
use crate::config::WsFederationConfig;

/// Per-realm settings for tokens issued to a relying party.
///
/// Registrations are optional. When a realm has none, [`Self::from_defaults`]
/// synthesizes a complete value from the injected configuration so later
/// steps never deal with partially populated settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelyingParty {
    /// Realm (`wtrealm`) these settings apply to.
    pub realm: String,

    /// Token type URI.
    pub token_type: String,

    /// Signature algorithm URI.
    pub signature_algorithm: String,

    /// Digest algorithm URI.
    pub digest_algorithm: String,

    /// SAML name identifier format URI.
    pub name_identifier_format: String,

    /// Mapping from principal claim names to outgoing claim types.
    pub claim_mapping: BTreeMap<String, String>,
}

impl RelyingParty {
    /// Creates settings for a realm populated from configuration defaults.
    #[must_use]
    pub fn from_defaults(realm: impl Into<String>, config: &WsFederationConfig) -> Self {
        Self {
            realm: realm.into(),
            token_type: config.default_token_type.clone(),
            signature_algorithm: config.default_signature_algorithm.clone(),
            digest_algorithm: config.default_digest_algorithm.clone(),
            name_identifier_format: config.default_name_identifier_format.clone(),
            claim_mapping: config.default_claim_mapping.clone(),
        }
    }

    /// Sets the token type.
    #[must_use]
    pub fn with_token_type(mut self, token_type: impl Into<String>) -> Self {
        self.token_type = token_type.into();
        self
    }

    /// Adds a claim mapping entry.
    #[must_use]
    pub fn with_claim_mapping(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.claim_mapping.insert(from.into(), to.into());
        self
    }

    /// Returns true if tokens use the legacy SAML 1.1 profile.
    #[must_use]
    pub fn is_saml11(&self) -> bool {
        self.token_type == token_types::SAML11_TOKEN_PROFILE11
    }
}
