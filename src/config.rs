use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::datasets::fixtures::FixtureSource;
use crate::datasets::remote::RemoteSource;
use crate::datasets::{DataProvider, DatasetSource};
use crate::schemas::AppState;

/// Which dataset source backs the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSourceKind {
    Fixtures,
    Remote,
}

impl DataSourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSourceKind::Fixtures => "fixtures",
            DataSourceKind::Remote => "remote",
        }
    }
}

impl FromStr for DataSourceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fixtures" => Ok(DataSourceKind::Fixtures),
            "remote" => Ok(DataSourceKind::Remote),
            other => anyhow::bail!("unknown DATA_SOURCE '{}', expected fixtures|remote", other),
        }
    }
}

/// Environment-derived configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_source: DataSourceKind,
    pub api_base_url: String,
    pub cache_ttl: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let data_source = std::env::var("DATA_SOURCE")
            .unwrap_or_else(|_| "fixtures".to_string())
            .parse()?;
        let api_base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:4000/api".to_string());
        let cache_ttl_secs = match std::env::var("CACHE_TTL_SECS") {
            Ok(raw) => raw.parse::<u64>()?,
            Err(_) => 300,
        };

        Ok(Self {
            data_source,
            api_base_url,
            cache_ttl: Duration::from_secs(cache_ttl_secs),
        })
    }
}

/// Initialize application configuration and state
pub fn initialize_app_state() -> Result<AppState> {
    let config = AppConfig::from_env()?;

    let source: Arc<dyn DatasetSource> = match config.data_source {
        DataSourceKind::Fixtures => Arc::new(FixtureSource),
        DataSourceKind::Remote => {
            tracing::info!("Using remote dataset source: {}", config.api_base_url);
            Arc::new(RemoteSource::new(&config.api_base_url))
        }
    };
    let provider = Arc::new(DataProvider::new(source, config.cache_ttl));

    Ok(AppState { provider, config })
}

/// Get bind address from environment or use default
pub fn get_bind_address() -> String {
    std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}
