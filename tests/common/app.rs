use axum_test::TestServer;
use cinema_api::build_router;
use cinema_api::config::Config;
use cinema_api::state::AppState;

/// Test configuration
///
/// Every test gets its own in-memory SQLite database, held by a single pooled connection.
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        database_min_connections: 1,
        host: "127.0.0.1".to_string(),
        port: 0,
    }
}

/// Test application wrapper
pub struct TestApp {
    pub server: TestServer,
    #[allow(dead_code)]
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let state = AppState::new(test_config())
            .await
            .expect("Failed to create test app state");

        let router = build_router(state.clone());
        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, state }
    }
}
