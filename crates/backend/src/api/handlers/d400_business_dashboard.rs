use axum::{extract::State, http::StatusCode, Json};
use contracts::dashboards::d400_business_dashboard::{
    DashboardRequest, DashboardResponse, ErrorResponse, FilterOptions,
};
use std::sync::Arc;

use crate::dashboards::d400_business_dashboard::service;
use crate::shared::data::{Dataset, LoadError};
use crate::shared::state::AppState;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn load_dataset(state: &AppState) -> Result<Arc<Dataset>, ApiError> {
    state.provider.dataset().map_err(|e: LoadError| {
        tracing::error!("D400 Dashboard: Failed to load dataset: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })
}

/// GET /api/d400/dashboard
///
/// Whole dataset range, no product/country restriction.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardResponse>, ApiError> {
    build(&state, DashboardRequest::default())
}

/// POST /api/d400/dashboard
pub async fn post_dashboard(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DashboardRequest>,
) -> Result<Json<DashboardResponse>, ApiError> {
    build(&state, request)
}

fn build(state: &AppState, request: DashboardRequest) -> Result<Json<DashboardResponse>, ApiError> {
    let dataset = load_dataset(state)?;
    let response = service::build_dashboard(&dataset, &request);
    tracing::info!(
        "D400 Dashboard: {} rows matched, total revenue {}",
        response.matched_rows,
        response.summary.total_revenue_display
    );
    Ok(Json(response))
}

/// GET /api/d400/filter_options
pub async fn get_filter_options(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FilterOptions>, ApiError> {
    let dataset = load_dataset(&state)?;
    let options = service::filter_options(&dataset);
    tracing::info!(
        "D400 Dashboard: Returning {} products and {} countries",
        options.products.len(),
        options.countries.len()
    );
    Ok(Json(options))
}
