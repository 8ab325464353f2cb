use axum::{Json, extract::rejection::JsonRejection};

use bankdash_core::DashboardView;

use crate::api_error::ApiError;
use crate::api_types::ChartsRequest;

/// Derive the four chart datasets from whatever the page found in local storage.
pub async fn charts(
    payload: Result<Json<ChartsRequest>, JsonRejection>,
) -> Result<Json<DashboardView>, ApiError> {
    let Json(req) = payload?;
    Ok(Json(DashboardView::from_stored(req.stored.as_deref())))
}
