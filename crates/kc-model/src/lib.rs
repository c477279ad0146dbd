//! # kc-model
//!
//! Domain models for Keycloak Rust.
//!
//! This crate defines the core domain entities shared by the storage and
//! protocol crates. Currently this is the [`Client`] registration, which
//! every protocol (`OpenID` Connect, SAML, WS-Federation) resolves before
//! issuing anything.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod client;

pub use client::{Client, Protocol};
