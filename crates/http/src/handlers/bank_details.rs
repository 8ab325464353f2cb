use axum::{Json, extract::rejection::JsonRejection};

use bankdash_core::bank_details::{RawForm, coerce_form};

use crate::api_error::ApiError;
use crate::api_types::ValidateResponse;

/// Coerce a submitted form into a record. Nothing is stored here; the page
/// writes the returned record into the browser's local storage.
pub async fn validate_bank_details(
    payload: Result<Json<RawForm>, JsonRejection>,
) -> Result<Json<ValidateResponse>, ApiError> {
    let Json(raw) = payload?;
    let record = coerce_form(&raw).map_err(|errors| {
        tracing::debug!(fields = errors.len(), "bank details rejected");
        ApiError::Validation(errors)
    })?;
    Ok(Json(ValidateResponse { record }))
}
