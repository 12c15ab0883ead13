//! Shared fixtures for API integration tests.

#![allow(dead_code)]

use meditrack_api::{ApiClient, ApiConfig};
use meditrack_core::{MemoryStorage, Role, SessionStore};
use tracing_subscriber::EnvFilter;
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";

/// Log to the test output when `RUST_LOG` is set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn anonymous_session() -> SessionStore {
    SessionStore::open(MemoryStorage::new()).unwrap()
}

pub fn session_as(role: Role) -> SessionStore {
    let store = anonymous_session();
    store.login(TOKEN, role, "tester").unwrap();
    store
}

pub fn client_for(server: &MockServer, session: SessionStore) -> ApiClient {
    init_tracing();
    let config = ApiConfig::new(&format!("{}/api", server.uri())).unwrap();
    ApiClient::new(config, session).unwrap()
}
