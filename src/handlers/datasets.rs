use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;
use tracing::{error, instrument};

use crate::datasets::DatasetKind;
use crate::error::DashboardError;
use crate::schemas::{ApiResponse, AppState, ErrorResponse};

/// Raw dataset passthrough: the JSON array backing one dataset, straight
/// from the cached provider. Goes through the same TTL cache as the pages.
#[instrument(skip(state))]
pub async fn get_dataset(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<serde_json::Value>>, (StatusCode, Json<ErrorResponse>)> {
    let kind: DatasetKind = name.parse().map_err(|message: String| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(message, "UNKNOWN_DATASET")),
        )
    })?;

    let provider = &state.provider;
    let data = match kind {
        DatasetKind::Properties => to_json(provider.properties().await)?,
        DatasetKind::Payments => to_json(provider.payments().await)?,
        DatasetKind::Expenses => to_json(provider.expenses().await)?,
        DatasetKind::Occupancy => to_json(provider.occupancy().await)?,
        DatasetKind::Maintenance => to_json(provider.maintenance().await)?,
        DatasetKind::Tenants => to_json(provider.tenants().await)?,
    };

    Ok(Json(ApiResponse {
        data,
        message: "Dataset retrieved successfully".to_string(),
        success: true,
    }))
}

fn to_json<T: Serialize>(
    rows: crate::error::Result<Arc<Vec<T>>>,
) -> Result<serde_json::Value, (StatusCode, Json<ErrorResponse>)> {
    let rows = rows.map_err(|err| match err {
        DashboardError::DataUnavailable { .. } => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse::new(err, "DATA_UNAVAILABLE")),
        ),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(other, "INTERNAL_ERROR")),
        ),
    })?;

    serde_json::to_value(rows.as_slice()).map_err(|err| {
        error!("Failed to serialize dataset: {}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(err, "INTERNAL_ERROR")),
        )
    })
}
