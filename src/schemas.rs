use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::charts::{ChartKind, ChartSeries, ChartSpec};
use crate::config::AppConfig;
use crate::datasets::model::{
    ExpenseCategory, ExpenseRecord, MaintenanceStatus, MaintenanceTally, OccupancyRecord,
    PaymentRecord, Property, PropertyStatus, PropertyType, TenantSummary,
};
use crate::datasets::{DataProvider, DatasetKind};
use crate::filters::DashboardPage;
use crate::pages::{DatasetNotice, MetricCard, PageView, TableView};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Cached dataset access
    pub provider: Arc<DataProvider>,
    /// Resolved environment configuration
    pub config: AppConfig,
}

/// Query parameters for page endpoints
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PageQuery {
    /// Start of the reporting range (YYYY-MM-DD)
    pub start_date: Option<NaiveDate>,
    /// End of the reporting range (YYYY-MM-DD)
    pub end_date: Option<NaiveDate>,
    /// Comma-separated property types; absent means all
    pub types: Option<String>,
    /// Comma-separated property statuses; absent means all
    pub statuses: Option<String>,
}

/// One entry in the page listing
#[derive(Debug, Serialize, ToSchema)]
pub struct PageDescriptor {
    /// Page identifier
    pub page: DashboardPage,
    /// Human-readable page title
    pub title: String,
    /// Endpoint serving the page's render tree
    pub path: String,
}

impl PageDescriptor {
    pub fn for_page(page: DashboardPage) -> Self {
        Self {
            page,
            title: page.title().to_string(),
            path: format!("/api/v1/pages/{}", page.slug()),
        }
    }
}

/// API response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(error: impl ToString, code: &str) -> Self {
        Self {
            error: error.to_string(),
            code: code.to_string(),
            success: false,
        }
    }
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Configured dataset source
    pub data_source: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::pages::list_pages,
        crate::handlers::pages::get_page,
    ),
    components(
        schemas(
            ApiResponse<PageView>,
            ApiResponse<Vec<PageDescriptor>>,
            ErrorResponse,
            HealthResponse,
            PageQuery,
            PageDescriptor,
            PageView,
            MetricCard,
            TableView,
            DatasetNotice,
            ChartSpec,
            ChartSeries,
            ChartKind,
            DashboardPage,
            DatasetKind,
            Property,
            PropertyType,
            PropertyStatus,
            PaymentRecord,
            ExpenseRecord,
            ExpenseCategory,
            OccupancyRecord,
            MaintenanceTally,
            MaintenanceStatus,
            TenantSummary,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "pages", description = "Dashboard page rendering endpoints"),
        (name = "datasets", description = "Raw dataset passthrough endpoints"),
    ),
    info(
        title = "Propboard API",
        description = "Real estate portfolio analytics - dashboard pages rendered server-side from cached datasets",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
