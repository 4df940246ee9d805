//! Integration tests for Layer 2: Resolver
//!
//! Tests default filling, parametric placement, diagnostics, and idempotence
//! over whole scene documents.

mod diagnostics;
mod scenarios;
