//! WS-Federation Passive Requestor Protocol for Keycloak Rust.
//!
//! This crate handles the front half of a WS-Federation sign-in:
//!
//! - **Request parsing** - Extract a `wsignin1.0` message from an encoded
//!   request path and query
//! - **Sign-in validation** - Resolve the relying party, check its
//!   registration and decide whether the caller must authenticate first
//! - **Relying party settings** - Token type, signing algorithms and claim
//!   mapping per realm, with configurable defaults
//!
//! Token issuance and the HTTP endpoints live elsewhere.
//!
//! # Architecture
//!
//! - [`parser`] - Sign-in request parsing
//! - [`validation`] - The sign-in validator and its result
//! - [`store`] - Relying party registrations
//! - [`types`] - Protocol message, relying party and constants
//! - [`config`] - Defaults for unregistered relying parties
//! - [`principal`] - The authenticated caller
//! - [`clock`] - Time source
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use kc_protocol_wsfed::{SignInValidator, WsFederationConfig, parse_sign_in_request};
//!
//! let validator = SignInValidator::new(WsFederationConfig::from_env()?, clients, relying_parties);
//!
//! if let Some(message) = parse_sign_in_request(path_and_query) {
//!     let result = validator.validate(message, user).await?;
//! }
//! ```
//!
//! # Specifications
//!
//! - [WS-Federation 1.2](https://docs.oasis-open.org/wsfed/federation/v1.2/os/ws-federation-1.2-spec-os.html)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod clock;
pub mod config;
pub mod error;
pub mod parser;
pub mod principal;
pub mod store;
pub mod types;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, WsFederationConfig};
pub use error::{SignInError, WsFedError, WsFedResult};
pub use parser::parse_sign_in_request;
pub use principal::{Claim, Principal};
pub use store::{InMemoryRelyingPartyProvider, RelyingPartyProvider, resolve_relying_party};
pub use types::*;
pub use validation::{
    Freshness, SignInOutcome, SignInValidationResult, SignInValidator, ValidationSummary,
    evaluate_freshness,
};
