//! End-to-end tests for Keycloak Rust. See `tests/`.
