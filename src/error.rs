use thiserror::Error;
use tracing::error;

use crate::datasets::DatasetKind;

/// Error types for the dashboard service.
///
/// Missing tally rows and empty filter selections are recovered by rule
/// (zero default / empty render state) and intentionally have no variant
/// here; only failures a caller must react to are represented.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// One dataset could not be fetched or parsed. Recovered per-widget:
    /// the affected page section is replaced by a notice, the rest renders.
    #[error("dataset '{dataset}' unavailable: {reason}")]
    DataUnavailable { dataset: DatasetKind, reason: String },

    /// Error from Polars DataFrame operations
    #[error("DataFrame error: {0}")]
    Frame(String),

    /// Malformed filter input (bad date range, unknown enum value)
    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    /// A cache entry did not have the expected dataset shape
    #[error("cache error: {0}")]
    Cache(String),
}

impl DashboardError {
    pub fn data_unavailable(dataset: DatasetKind, reason: impl ToString) -> Self {
        Self::DataUnavailable {
            dataset,
            reason: reason.to_string(),
        }
    }
}

impl From<polars::error::PolarsError> for DashboardError {
    fn from(error: polars::error::PolarsError) -> Self {
        let err = match error {
            polars::error::PolarsError::NoData(_) => {
                DashboardError::Frame(format!("No data: {}", error))
            }
            polars::error::PolarsError::ShapeMismatch(_) => {
                DashboardError::Frame(format!("Shape mismatch: {}", error))
            }
            polars::error::PolarsError::SchemaMismatch(_) => {
                DashboardError::Frame(format!("Schema mismatch: {}", error))
            }
            polars::error::PolarsError::ColumnNotFound(_) => {
                DashboardError::Frame(format!("Column not found: {}", error))
            }
            _ => DashboardError::Frame(error.to_string()),
        };
        error!(?err, "DataFrame error");
        err
    }
}

/// Type alias for Result with DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;
