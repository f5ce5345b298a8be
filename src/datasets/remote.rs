use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::datasets::model::{
    ExpenseRecord, MaintenanceTally, OccupancyRecord, PaymentRecord, Property, TenantSummary,
};
use crate::datasets::{DatasetKind, DatasetSource};
use crate::error::{DashboardError, Result};

/// Dataset source backed by the portfolio REST API.
///
/// One GET per dataset endpoint; each endpoint returns a JSON array of the
/// corresponding entity. A non-2xx status or malformed body is reported as
/// `DataUnavailable` for that dataset only, never as a process failure.
#[derive(Debug, Clone)]
pub struct RemoteSource {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, kind: DatasetKind) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), kind.endpoint());
        debug!("Fetching dataset '{}' from {}", kind, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DashboardError::data_unavailable(kind, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Dataset '{}' request returned status {}", kind, status);
            return Err(DashboardError::data_unavailable(
                kind,
                format!("unexpected status {}", status),
            ));
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| DashboardError::data_unavailable(kind, e))
    }
}

#[async_trait]
impl DatasetSource for RemoteSource {
    async fn fetch_properties(&self) -> Result<Vec<Property>> {
        self.fetch(DatasetKind::Properties).await
    }

    async fn fetch_payments(&self) -> Result<Vec<PaymentRecord>> {
        self.fetch(DatasetKind::Payments).await
    }

    async fn fetch_expenses(&self) -> Result<Vec<ExpenseRecord>> {
        self.fetch(DatasetKind::Expenses).await
    }

    async fn fetch_occupancy(&self) -> Result<Vec<OccupancyRecord>> {
        self.fetch(DatasetKind::Occupancy).await
    }

    async fn fetch_maintenance(&self) -> Result<Vec<MaintenanceTally>> {
        self.fetch(DatasetKind::Maintenance).await
    }

    async fn fetch_tenants(&self) -> Result<Vec<TenantSummary>> {
        self.fetch(DatasetKind::Tenants).await
    }
}
