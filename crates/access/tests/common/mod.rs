#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! Fixtures use the standard client-dashboard tables from `defaults`, so
//! tests exercise the same menu surface the product ships with.

#![allow(dead_code)]

use vetrina_access::defaults;
use vetrina_access::menu::MenuRegistry;
use vetrina_access::permissions::{AccessService, PermissionSet};

/// Install a tracing subscriber once so warn-level registry logs surface in
/// test output under RUST_LOG.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The standard client-dashboard registry.
pub fn client_registry() -> MenuRegistry {
    MenuRegistry::from_configs(defaults::client_dashboard_menu())
}

/// An access service over the standard client-dashboard registry.
pub fn client_service() -> AccessService {
    AccessService::new(client_registry())
}

/// Build a permission set from string literals.
pub fn perms(codes: &[&str]) -> PermissionSet {
    codes.iter().copied().collect()
}
