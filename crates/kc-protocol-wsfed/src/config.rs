//! WS-Federation configuration.
//!
//! The defaults here are used whenever a realm has no relying party
//! registration of its own. Configuration is an explicit value handed to the
//! validator at construction; nothing reads it from global state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{
    digest_algorithms, jwt_claim_types, name_identifier_formats, signature_algorithms,
    token_types, ws_claim_types,
};

/// Environment variable overriding the default token type.
pub const ENV_DEFAULT_TOKEN_TYPE: &str = "KC_WSFED_DEFAULT_TOKEN_TYPE";
/// Environment variable overriding the default signature algorithm.
pub const ENV_DEFAULT_SIGNATURE_ALGORITHM: &str = "KC_WSFED_DEFAULT_SIGNATURE_ALGORITHM";
/// Environment variable overriding the default digest algorithm.
pub const ENV_DEFAULT_DIGEST_ALGORITHM: &str = "KC_WSFED_DEFAULT_DIGEST_ALGORITHM";
/// Environment variable overriding the default name identifier format.
pub const ENV_DEFAULT_NAME_ID_FORMAT: &str = "KC_WSFED_DEFAULT_NAME_ID_FORMAT";
/// Environment variable overriding the default claim mapping (JSON object).
pub const ENV_DEFAULT_CLAIM_MAPPING: &str = "KC_WSFED_DEFAULT_CLAIM_MAPPING";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value was present but blank.
    #[error("{key} must not be empty")]
    Empty {
        /// Offending key.
        key: &'static str,
    },

    /// The claim mapping was not a JSON object of strings.
    #[error("invalid claim mapping in {key}: {source}")]
    InvalidClaimMapping {
        /// Offending key.
        key: &'static str,
        /// Parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// A configuration document could not be parsed.
    #[error("invalid configuration document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}

/// Process-wide WS-Federation defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WsFederationConfig {
    /// Token type URI for realms without a relying party registration.
    pub default_token_type: String,

    /// Signature algorithm URI.
    pub default_signature_algorithm: String,

    /// Digest algorithm URI.
    pub default_digest_algorithm: String,

    /// SAML name identifier format URI.
    pub default_name_identifier_format: String,

    /// Claim mapping from principal claim names to outgoing claim types.
    pub default_claim_mapping: BTreeMap<String, String>,
}

impl Default for WsFederationConfig {
    fn default() -> Self {
        Self {
            default_token_type: token_types::SAML11_TOKEN_PROFILE11.to_string(),
            default_signature_algorithm: signature_algorithms::RSA_SHA256.to_string(),
            default_digest_algorithm: digest_algorithms::SHA256.to_string(),
            default_name_identifier_format: name_identifier_formats::UNSPECIFIED.to_string(),
            default_claim_mapping: default_claim_mapping(),
        }
    }
}

impl WsFederationConfig {
    /// Loads configuration from environment variables.
    ///
    /// A `.env` file is honoured if present. Unset variables keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is blank or the claim mapping is not
    /// a JSON object of strings.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let overrides = [
            (ENV_DEFAULT_TOKEN_TYPE, &mut config.default_token_type),
            (
                ENV_DEFAULT_SIGNATURE_ALGORITHM,
                &mut config.default_signature_algorithm,
            ),
            (
                ENV_DEFAULT_DIGEST_ALGORITHM,
                &mut config.default_digest_algorithm,
            ),
            (
                ENV_DEFAULT_NAME_ID_FORMAT,
                &mut config.default_name_identifier_format,
            ),
        ];
        for (key, slot) in overrides {
            if let Some(value) = lookup(key) {
                *slot = non_empty(key, value)?;
            }
        }

        if let Some(value) = lookup(ENV_DEFAULT_CLAIM_MAPPING) {
            let value = non_empty(ENV_DEFAULT_CLAIM_MAPPING, value)?;
            config.default_claim_mapping =
                serde_json::from_str(&value).map_err(|source| ConfigError::InvalidClaimMapping {
                    key: ENV_DEFAULT_CLAIM_MAPPING,
                    source,
                })?;
        }

        Ok(config)
    }

    /// Parses a JSON configuration document. Missing fields keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON for this type.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(document)?)
    }
}

fn non_empty(key: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty { key });
    }
    Ok(trimmed.to_string())
}

/// Default mapping from JWT style claim names to WS-* claim types.
fn default_claim_mapping() -> BTreeMap<String, String> {
    [
        (jwt_claim_types::NAME, ws_claim_types::NAME),
        (jwt_claim_types::SUBJECT, ws_claim_types::NAME_IDENTIFIER),
        (jwt_claim_types::EMAIL, ws_claim_types::EMAIL),
        (jwt_claim_types::GIVEN_NAME, ws_claim_types::GIVEN_NAME),
        (jwt_claim_types::FAMILY_NAME, ws_claim_types::SURNAME),
        (jwt_claim_types::BIRTH_DATE, ws_claim_types::DATE_OF_BIRTH),
        (jwt_claim_types::WEBSITE, ws_claim_types::WEBPAGE),
        (jwt_claim_types::GENDER, ws_claim_types::GENDER),
        (jwt_claim_types::ROLE, ws_claim_types::ROLE),
    ]
    .into_iter()
    .map(|(from, to)| (from.to_string(), to.to_string()))
    .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_use_saml11_and_sha256() {
        let config = WsFederationConfig::default();

        assert_eq!(config.default_token_type, token_types::SAML11_TOKEN_PROFILE11);
        assert_eq!(config.default_signature_algorithm, signature_algorithms::RSA_SHA256);
        assert_eq!(config.default_digest_algorithm, digest_algorithms::SHA256);
        assert_eq!(
            config.default_claim_mapping.get("sub").map(String::as_str),
            Some(ws_claim_types::NAME_IDENTIFIER)
        );
    }

    #[test]
    fn unset_variables_keep_defaults() {
        let config = WsFederationConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, WsFederationConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = WsFederationConfig::from_lookup(lookup_from(&[
            (ENV_DEFAULT_TOKEN_TYPE, token_types::SAML2_TOKEN_PROFILE11),
            (ENV_DEFAULT_DIGEST_ALGORITHM, " http://www.w3.org/2001/04/xmlenc#sha512 "),
            (ENV_DEFAULT_CLAIM_MAPPING, r#"{"sub":"urn:nameid"}"#),
        ]))
        .unwrap();

        assert_eq!(config.default_token_type, token_types::SAML2_TOKEN_PROFILE11);
        assert_eq!(config.default_digest_algorithm, digest_algorithms::SHA512);
        assert_eq!(config.default_claim_mapping.len(), 1);
        assert_eq!(config.default_signature_algorithm, signature_algorithms::RSA_SHA256);
    }

    #[test]
    fn blank_value_is_rejected() {
        let err =
            WsFederationConfig::from_lookup(lookup_from(&[(ENV_DEFAULT_TOKEN_TYPE, "  ")]))
                .unwrap_err();
        assert!(matches!(err, ConfigError::Empty { key } if key == ENV_DEFAULT_TOKEN_TYPE));
    }

    #[test]
    fn malformed_claim_mapping_is_rejected() {
        let err = WsFederationConfig::from_lookup(lookup_from(&[(
            ENV_DEFAULT_CLAIM_MAPPING,
            r#"["sub"]"#,
        )]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidClaimMapping { .. }));
    }

    #[test]
    fn json_document_fills_missing_fields() {
        let config = WsFederationConfig::from_json(
            r#"{"default_token_type":"http://docs.oasis-open.org/wss/oasis-wss-saml-token-profile-1.1#SAMLV2.0"}"#,
        )
        .unwrap();

        assert_eq!(config.default_token_type, token_types::SAML2_TOKEN_PROFILE11);
        assert_eq!(
            config.default_claim_mapping,
            WsFederationConfig::default().default_claim_mapping
        );
    }
}
