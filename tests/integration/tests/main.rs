//! End-to-End Integration Tests
//!
//! These tests drive the WS-Federation sign-in flow from a raw encoded
//! request through parsing and validation, using in-memory stores.

mod common;
mod wsfed_signin;
