use async_trait::async_trait;
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use utoipa::ToSchema;

use crate::error::{DashboardError, Result};

pub mod fixtures;
pub mod model;
pub mod remote;

pub use fixtures::FixtureSource;
pub use remote::RemoteSource;

use model::{
    ExpenseRecord, MaintenanceTally, OccupancyRecord, PaymentRecord, Property, TenantSummary,
};

/// The six named datasets the dashboard composes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Properties,
    Payments,
    Expenses,
    Occupancy,
    Maintenance,
    Tenants,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 6] = [
        DatasetKind::Properties,
        DatasetKind::Payments,
        DatasetKind::Expenses,
        DatasetKind::Occupancy,
        DatasetKind::Maintenance,
        DatasetKind::Tenants,
    ];

    /// Path segment of the dataset endpoint, relative to the API base URL.
    pub fn endpoint(&self) -> &'static str {
        match self {
            DatasetKind::Properties => "properties",
            DatasetKind::Payments => "payments",
            DatasetKind::Expenses => "expenses",
            DatasetKind::Occupancy => "occupancy",
            DatasetKind::Maintenance => "maintenance",
            DatasetKind::Tenants => "tenants",
        }
    }
}

impl std::fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.endpoint())
    }
}

impl FromStr for DatasetKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        DatasetKind::ALL
            .into_iter()
            .find(|kind| kind.endpoint() == s)
            .ok_or_else(|| format!("unknown dataset '{}'", s))
    }
}

/// Anything that can produce the six datasets: the remote API or the
/// fixture set. Each fetch is independent; failures are per-dataset.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch_properties(&self) -> Result<Vec<Property>>;
    async fn fetch_payments(&self) -> Result<Vec<PaymentRecord>>;
    async fn fetch_expenses(&self) -> Result<Vec<ExpenseRecord>>;
    async fn fetch_occupancy(&self) -> Result<Vec<OccupancyRecord>>;
    async fn fetch_maintenance(&self) -> Result<Vec<MaintenanceTally>>;
    async fn fetch_tenants(&self) -> Result<Vec<TenantSummary>>;
}

/// Cached dataset values, one variant per dataset kind.
#[derive(Clone, Debug)]
pub enum CachedDataset {
    Properties(Arc<Vec<Property>>),
    Payments(Arc<Vec<PaymentRecord>>),
    Expenses(Arc<Vec<ExpenseRecord>>),
    Occupancy(Arc<Vec<OccupancyRecord>>),
    Maintenance(Arc<Vec<MaintenanceTally>>),
    Tenants(Arc<Vec<TenantSummary>>),
}

/// The result of fetching all six datasets at once. Each dataset carries
/// its own `Result` so renderers can degrade widget-by-widget instead of
/// failing the whole page.
#[derive(Debug)]
pub struct DatasetSnapshot {
    pub properties: Result<Arc<Vec<Property>>>,
    pub payments: Result<Arc<Vec<PaymentRecord>>>,
    pub expenses: Result<Arc<Vec<ExpenseRecord>>>,
    pub occupancy: Result<Arc<Vec<OccupancyRecord>>>,
    pub maintenance: Result<Arc<Vec<MaintenanceTally>>>,
    pub tenants: Result<Arc<Vec<TenantSummary>>>,
}

/// Caching facade over a `DatasetSource`.
///
/// Owns a per-dataset TTL cache; repeated access within the TTL returns the
/// cached value without consulting the source. Errors are never cached, so
/// an unavailable dataset is retried on the next request.
///
/// Month-keyed datasets are sorted into calendar order on fetch, making the
/// chronological meaning of "last element" an explicit guarantee rather
/// than a positional accident of the source.
pub struct DataProvider {
    source: Arc<dyn DatasetSource>,
    cache: Cache<DatasetKind, CachedDataset>,
}

impl DataProvider {
    pub fn new(source: Arc<dyn DatasetSource>, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(DatasetKind::ALL.len() as u64)
            .time_to_live(ttl)
            .build();
        Self { source, cache }
    }

    pub async fn properties(&self) -> Result<Arc<Vec<Property>>> {
        let source = Arc::clone(&self.source);
        let entry = self
            .cache
            .try_get_with(DatasetKind::Properties, async move {
                let rows = source.fetch_properties().await?;
                debug!("Loaded {} properties from source", rows.len());
                Ok(CachedDataset::Properties(Arc::new(rows)))
            })
            .await
            .map_err(unwrap_shared)?;
        match entry {
            CachedDataset::Properties(rows) => Ok(rows),
            other => Err(cache_shape_error(DatasetKind::Properties, &other)),
        }
    }

    pub async fn payments(&self) -> Result<Arc<Vec<PaymentRecord>>> {
        let source = Arc::clone(&self.source);
        let entry = self
            .cache
            .try_get_with(DatasetKind::Payments, async move {
                let mut rows = source.fetch_payments().await?;
                sort_by_month(&mut rows, |r| r.month.as_str());
                Ok(CachedDataset::Payments(Arc::new(rows)))
            })
            .await
            .map_err(unwrap_shared)?;
        match entry {
            CachedDataset::Payments(rows) => Ok(rows),
            other => Err(cache_shape_error(DatasetKind::Payments, &other)),
        }
    }

    pub async fn expenses(&self) -> Result<Arc<Vec<ExpenseRecord>>> {
        let source = Arc::clone(&self.source);
        let entry = self
            .cache
            .try_get_with(DatasetKind::Expenses, async move {
                let mut rows = source.fetch_expenses().await?;
                sort_by_month(&mut rows, |r| r.month.as_str());
                Ok(CachedDataset::Expenses(Arc::new(rows)))
            })
            .await
            .map_err(unwrap_shared)?;
        match entry {
            CachedDataset::Expenses(rows) => Ok(rows),
            other => Err(cache_shape_error(DatasetKind::Expenses, &other)),
        }
    }

    pub async fn occupancy(&self) -> Result<Arc<Vec<OccupancyRecord>>> {
        let source = Arc::clone(&self.source);
        let entry = self
            .cache
            .try_get_with(DatasetKind::Occupancy, async move {
                let mut rows = source.fetch_occupancy().await?;
                sort_by_month(&mut rows, |r| r.month.as_str());
                Ok(CachedDataset::Occupancy(Arc::new(rows)))
            })
            .await
            .map_err(unwrap_shared)?;
        match entry {
            CachedDataset::Occupancy(rows) => Ok(rows),
            other => Err(cache_shape_error(DatasetKind::Occupancy, &other)),
        }
    }

    pub async fn maintenance(&self) -> Result<Arc<Vec<MaintenanceTally>>> {
        let source = Arc::clone(&self.source);
        let entry = self
            .cache
            .try_get_with(DatasetKind::Maintenance, async move {
                let rows = source.fetch_maintenance().await?;
                Ok(CachedDataset::Maintenance(Arc::new(rows)))
            })
            .await
            .map_err(unwrap_shared)?;
        match entry {
            CachedDataset::Maintenance(rows) => Ok(rows),
            other => Err(cache_shape_error(DatasetKind::Maintenance, &other)),
        }
    }

    pub async fn tenants(&self) -> Result<Arc<Vec<TenantSummary>>> {
        let source = Arc::clone(&self.source);
        let entry = self
            .cache
            .try_get_with(DatasetKind::Tenants, async move {
                let rows = source.fetch_tenants().await?;
                Ok(CachedDataset::Tenants(Arc::new(rows)))
            })
            .await
            .map_err(unwrap_shared)?;
        match entry {
            CachedDataset::Tenants(rows) => Ok(rows),
            other => Err(cache_shape_error(DatasetKind::Tenants, &other)),
        }
    }

    /// Fetch all six datasets concurrently. Fetches are data-independent,
    /// so no ordering is imposed between them.
    pub async fn snapshot(&self) -> DatasetSnapshot {
        let (properties, payments, expenses, occupancy, maintenance, tenants) = tokio::join!(
            self.properties(),
            self.payments(),
            self.expenses(),
            self.occupancy(),
            self.maintenance(),
            self.tenants(),
        );
        DatasetSnapshot {
            properties,
            payments,
            expenses,
            occupancy,
            maintenance,
            tenants,
        }
    }
}

fn unwrap_shared(error: Arc<DashboardError>) -> DashboardError {
    (*error).clone()
}

fn cache_shape_error(expected: DatasetKind, got: &CachedDataset) -> DashboardError {
    DashboardError::Cache(format!(
        "unexpected cached entry for '{}': {:?}",
        expected, got
    ))
}

/// Calendar position of a month label ("Jan", "February", ...), 1-12.
fn month_ordinal(label: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ];
    let lower = label.to_ascii_lowercase();
    MONTHS
        .iter()
        .position(|m| lower.starts_with(m))
        .map(|i| i as u32 + 1)
}

/// Stable sort into calendar month order. Unrecognized labels keep their
/// relative input order and sort after all known months.
fn sort_by_month<T>(rows: &mut [T], month: impl Fn(&T) -> &str) {
    rows.sort_by_key(|row| month_ordinal(month(row)).unwrap_or(13));
}
