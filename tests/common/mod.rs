#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use dalil_core::core::client::SessionClient;
use dalil_core::core::config::ApiConfig;
use dalil_core::features::auth::{MemorySessionStore, Session, StoredSession};
use dalil_core::features::directory::DirectoryGateway;
use httpmock::MockServer;
use serde_json::json;

pub struct Harness {
    pub store: Arc<MemorySessionStore>,
    pub client: Arc<SessionClient>,
    pub gateway: Arc<DirectoryGateway>,
}

pub fn api_config(server: &MockServer) -> ApiConfig {
    let mut config = ApiConfig::with_base_url(server.url("/api"));
    config.request_timeout = Duration::from_secs(5);
    config
}

pub async fn harness_with(config: ApiConfig, token: Option<&str>) -> Harness {
    let store = Arc::new(match token {
        Some(token) => MemorySessionStore::with_session(StoredSession {
            token: token.to_string(),
            user: json!("admin"),
        }),
        None => MemorySessionStore::new(),
    });
    let session = Arc::new(Session::restore(store.clone()).await.unwrap());
    let client = Arc::new(SessionClient::new(config, session).unwrap());
    let gateway = Arc::new(DirectoryGateway::new(Arc::clone(&client)));

    Harness {
        store,
        client,
        gateway,
    }
}

pub async fn harness(server: &MockServer, token: Option<&str>) -> Harness {
    harness_with(api_config(server), token).await
}
