#[cfg(test)]
pub mod test_utils {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::Router;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    use crate::config::{AppConfig, DataSourceKind};
    use crate::datasets::{DataProvider, DatasetSource, FixtureSource};
    use crate::router::create_router;
    use crate::schemas::AppState;

    /// Configuration matching the fixture-backed defaults
    pub fn test_config() -> AppConfig {
        AppConfig {
            data_source: DataSourceKind::Fixtures,
            api_base_url: "http://localhost:4000/api".to_string(),
            cache_ttl: Duration::from_secs(300),
        }
    }

    /// Create AppState for testing, backed by the fixture datasets
    pub fn setup_test_app_state() -> AppState {
        setup_app_state_with_source(Arc::new(FixtureSource))
    }

    /// Create AppState wired to an arbitrary dataset source, for tests
    /// that exercise degraded rendering
    pub fn setup_app_state_with_source(source: Arc<dyn DatasetSource>) -> AppState {
        AppState {
            provider: Arc::new(DataProvider::new(source, Duration::from_secs(300))),
            config: test_config(),
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr) // Output to stderr, which is captured by tests
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub fn setup_test_app() -> Router {
        let _ = init_test_tracing();
        create_router(setup_test_app_state())
    }
}
