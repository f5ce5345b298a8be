use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, instrument};

use crate::filters::{DashboardPage, FilterState};
use crate::pages::{render_page, PageView};
use crate::schemas::{ApiResponse, AppState, ErrorResponse, PageDescriptor, PageQuery};

/// List the available dashboard pages
#[utoipa::path(
    get,
    path = "/api/v1/pages",
    tag = "pages",
    responses(
        (status = 200, description = "Page listing retrieved successfully", body = ApiResponse<Vec<PageDescriptor>>)
    )
)]
#[instrument]
pub async fn list_pages() -> Json<ApiResponse<Vec<PageDescriptor>>> {
    let pages = DashboardPage::ALL
        .into_iter()
        .map(PageDescriptor::for_page)
        .collect();

    Json(ApiResponse {
        data: pages,
        message: "Page listing retrieved successfully".to_string(),
        success: true,
    })
}

/// Render one dashboard page
#[utoipa::path(
    get,
    path = "/api/v1/pages/{page}",
    tag = "pages",
    params(
        ("page" = String, Path, description = "Page slug (overview, properties, tenants, financial, maintenance, occupancy)"),
        ("start_date" = Option<String>, Query, description = "Start of the reporting range (YYYY-MM-DD)"),
        ("end_date" = Option<String>, Query, description = "End of the reporting range (YYYY-MM-DD)"),
        ("types" = Option<String>, Query, description = "Comma-separated property types"),
        ("statuses" = Option<String>, Query, description = "Comma-separated property statuses"),
    ),
    responses(
        (status = 200, description = "Page rendered successfully", body = ApiResponse<PageView>),
        (status = 400, description = "Invalid filter parameters", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Unknown page", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Page rendering failed", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_page(
    Path(page): Path<String>,
    Query(query): Query<PageQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PageView>>, (StatusCode, Json<ErrorResponse>)> {
    let page: DashboardPage = page.parse().map_err(|message: String| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(message, "UNKNOWN_PAGE")),
        )
    })?;

    let filters = FilterState::from_query(page, &query).map_err(|err| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(err, "INVALID_FILTER")),
        )
    })?;

    let snapshot = state.provider.snapshot().await;
    let view = render_page(&snapshot, &filters).map_err(|err| {
        error!("Failed to render page '{}': {}", page, err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(err, "RENDER_FAILED")),
        )
    })?;

    Ok(Json(ApiResponse {
        data: view,
        message: "Page rendered successfully".to_string(),
        success: true,
    }))
}
