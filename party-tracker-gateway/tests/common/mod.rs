//! Shared helpers for live integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use party_tracker_gateway::{PartyGateway, create_gateway};

/// Environment variable naming the backend under test.
pub const API_URL_VAR: &str = "PARTY_TRACKER_API_URL";

/// Skip the test when the backend URL environment variable is missing.
#[macro_export]
macro_rules! skip_if_no_backend {
    () => {
        if std::env::var("PARTY_TRACKER_API_URL").is_err() {
            eprintln!("skipping test: PARTY_TRACKER_API_URL is not set");
            return;
        }
    };
}

/// Build a gateway against the configured backend.
pub fn test_gateway() -> Arc<dyn PartyGateway> {
    let base_url = std::env::var(API_URL_VAR).expect("backend URL must be set");
    create_gateway(base_url)
}

/// Generate a unique party name so concurrent test runs don't collide.
pub fn generate_test_party_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-party-{}", &uuid.to_string()[..8])
}
