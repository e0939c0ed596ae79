//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::types::{ErrorResponse, LayoutQuery, StateResponse, TurbineRecord};

/// Returns configuration, adjustments, and summary metrics.
///
/// `GET /state` → 200 + `StateResponse` JSON
pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<StateResponse> {
    Json(StateResponse {
        config: state.config.clone(),
        adjustments: state.adjustments.clone(),
        summary: state.summary.clone(),
    })
}

/// Returns turbine records, optionally filtered by index range.
///
/// `GET /layout` → 200 + `Vec<TurbineRecord>` JSON
/// `GET /layout?from=N&to=M` → filtered range (inclusive)
/// `GET /layout?from=10&to=5` → 400 + `ErrorResponse`
pub async fn get_layout(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LayoutQuery>,
) -> impl IntoResponse {
    let from = query.from.unwrap_or(0);
    let to = query.to.unwrap_or(usize::MAX);

    if from > to {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("`from` ({from}) must be <= `to` ({to})"),
            }),
        ));
    }

    let records: Vec<TurbineRecord> = state
        .turbines
        .iter()
        .enumerate()
        .filter(|(i, _)| *i >= from && *i <= to)
        .map(|(i, t)| TurbineRecord::from_turbine(i, t))
        .collect();

    Ok(Json(records))
}
