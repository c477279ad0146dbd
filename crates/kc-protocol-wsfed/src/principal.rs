//! Authenticated caller identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::jwt_claim_types;

/// A single claim held by a principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Claim type (e.g. `sub`, `auth_time`).
    pub claim_type: String,
    /// Claim value.
    pub value: String,
}

impl Claim {
    /// Creates a claim.
    #[must_use]
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }
}

/// The caller's identity as established by the hosting pipeline.
///
/// A principal is authenticated when it carries a non-empty authentication
/// type. The authentication time is the `auth_time` claim in Unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Principal {
    /// Authentication type (e.g. `pwd`, `external`). Empty or absent means anonymous.
    pub authentication_type: Option<String>,
    /// Claims, in the order they were issued.
    pub claims: Vec<Claim>,
}

impl Principal {
    /// Creates an anonymous principal.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Creates an authenticated principal for `subject`, authenticated at `auth_time`.
    #[must_use]
    pub fn authenticated(subject: impl Into<String>, auth_time: DateTime<Utc>) -> Self {
        Self {
            authentication_type: Some("pwd".to_string()),
            claims: vec![
                Claim::new(jwt_claim_types::SUBJECT, subject),
                Claim::new(
                    jwt_claim_types::AUTHENTICATION_TIME,
                    auth_time.timestamp().to_string(),
                ),
            ],
        }
    }

    /// Adds a claim.
    #[must_use]
    pub fn with_claim(mut self, claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        self.claims.push(Claim::new(claim_type, value));
        self
    }

    /// Returns true if the principal has been authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authentication_type
            .as_deref()
            .is_some_and(|kind| !kind.is_empty())
    }

    /// Returns the first value of a claim type.
    #[must_use]
    pub fn find_first(&self, claim_type: &str) -> Option<&str> {
        self.claims
            .iter()
            .find(|claim| claim.claim_type == claim_type)
            .map(|claim| claim.value.as_str())
    }

    /// Returns the subject identifier.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.find_first(jwt_claim_types::SUBJECT)
    }

    /// Returns the authentication time, if the `auth_time` claim is present
    /// and holds a valid Unix timestamp.
    #[must_use]
    pub fn authentication_time(&self) -> Option<DateTime<Utc>> {
        self.find_first(jwt_claim_types::AUTHENTICATION_TIME)
            .and_then(|value| value.trim().parse::<i64>().ok())
            .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
    }
}
