use axum::{extract::State, http::StatusCode, Json};
use contracts::dashboards::d400_insurance_analytics::{
    DashboardMetaResponse, DashboardRequest, DashboardResponse, TabularRequest, TabularView,
};

use crate::dashboards::d400_insurance_analytics::selector::SelectionError;
use crate::dashboards::d400_insurance_analytics::service;
use crate::system::state::AppState;

/// GET /api/d400/meta
pub async fn get_meta(State(state): State<AppState>) -> Json<DashboardMetaResponse> {
    let meta = service::get_meta(&state.table, &state.settings, state.loaded_at);
    tracing::info!(
        "D400 Dashboard: Returning meta for {} rows, {} filters",
        meta.total_rows,
        meta.filters.len()
    );
    Json(meta)
}

/// POST /api/d400/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    Json(request): Json<DashboardRequest>,
) -> Result<Json<DashboardResponse>, StatusCode> {
    match service::build_dashboard(&state.table, &request, &state.settings.currency) {
        Ok(response) => {
            tracing::info!(
                "D400 Dashboard: {} of {} rows selected",
                response.row_count,
                response.total_rows
            );
            Ok(Json(response))
        }
        Err(e) => Err(reject(e)),
    }
}

/// POST /api/d400/table
pub async fn get_table(
    State(state): State<AppState>,
    Json(request): Json<TabularRequest>,
) -> Result<Json<TabularView>, StatusCode> {
    match service::build_table_view(&state.table, &request) {
        Ok(view) => {
            tracing::info!(
                "D400 Dashboard: Returning {} rows x {} columns",
                view.rows.len(),
                view.columns.len()
            );
            Ok(Json(view))
        }
        Err(e) => Err(reject(e)),
    }
}

fn reject(error: SelectionError) -> StatusCode {
    tracing::warn!("D400 Dashboard: Rejected selection: {}", error);
    StatusCode::BAD_REQUEST
}
