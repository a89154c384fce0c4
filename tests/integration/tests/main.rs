//! End-to-End Integration Tests
//!
//! These tests validate the complete MFA service over HTTP: each test
//! boots the real server on an ephemeral port and drives it with a
//! plain HTTP client.

mod common;
mod mfa_flows;
