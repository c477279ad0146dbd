//! # kc-storage
//!
//! Storage abstraction traits for Keycloak Rust.
//!
//! This crate defines the storage provider interfaces that concrete
//! storage backends implement, plus an in-memory backend for tests and
//! single-instance deployments.
//!
//! ## Provider Traits
//!
//! - [`ClientProvider`] - lookup and registration of clients

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod client;
pub mod error;
pub mod memory;

pub use client::ClientProvider;
pub use error::{StorageError, StorageResult};
pub use memory::InMemoryClientProvider;
