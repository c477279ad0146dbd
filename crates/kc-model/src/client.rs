//! Client domain model.
//!
//! Clients represent applications that can request authentication from
//! Keycloak. For WS-Federation the client is the relying party and its
//! `client_id` is the realm (`wtrealm`) it sends in sign-in requests.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Protocol type for a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Protocol {
    /// `OpenID` Connect protocol.
    #[default]
    OpenidConnect,
    /// SAML 2.0 protocol.
    Saml,
    /// WS-Federation passive requestor protocol.
    WsFederation,
}

impl Protocol {
    /// Returns the protocol tag as stored in client registrations.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OpenidConnect => "openid-connect",
            Self::Saml => "saml",
            Self::WsFederation => "ws-federation",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Keycloak client registration.
///
/// Redirect URIs are kept in registration order. Protocols that need a
/// single reply address (WS-Federation) use the first registered entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    // === Identity ===
    /// Unique identifier.
    pub id: Uuid,
    /// Unique client identifier (OAuth `client_id`, WS-Federation realm).
    pub client_id: String,
    /// Display name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Whether the client is enabled.
    pub enabled: bool,

    // === Timestamps ===
    /// When the client was created.
    pub created_at: DateTime<Utc>,
    /// When the client was last updated.
    pub updated_at: DateTime<Utc>,

    // === Protocol ===
    /// Protocol type.
    pub protocol: Protocol,

    // === URLs ===
    /// Allowed redirect URIs, in registration order.
    pub redirect_uris: Vec<String>,
}

impl Client {
    /// Creates a new enabled client with the given client ID.
    #[must_use]
    pub fn new(client_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            client_id: client_id.into(),
            name: None,
            description: None,
            enabled: true,
            created_at: now,
            updated_at: now,
            protocol: Protocol::default(),
            redirect_uris: Vec::new(),
        }
    }

    /// Creates a new WS-Federation client for the given realm.
    #[must_use]
    pub fn new_ws_federation(realm: impl Into<String>) -> Self {
        Self::new(realm).with_protocol(Protocol::WsFederation)
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the protocol.
    #[must_use]
    pub const fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Sets the enabled flag.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Appends a redirect URI. Duplicates are ignored so the first
    /// registration keeps its position.
    #[must_use]
    pub fn with_redirect_uri(mut self, uri: impl Into<String>) -> Self {
        let uri = uri.into();
        if !self.redirect_uris.contains(&uri) {
            self.redirect_uris.push(uri);
        }
        self
    }

    /// Returns the first registered redirect URI, if any.
    #[must_use]
    pub fn primary_redirect_uri(&self) -> Option<&str> {
        self.redirect_uris.first().map(String::as_str)
    }
}
