use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use bankdash_core::{LoginRequest, SessionCookie};

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::MessageResponse;

const JSON_MEDIA_TYPE: &str = "application/json";

pub async fn login(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains(JSON_MEDIA_TYPE));
    if !is_json {
        return Err(ApiError::UnsupportedMediaType(
            "Invalid Content-Type. Expected application/json.".to_owned(),
        ));
    }

    let req: LoginRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "login body is not valid JSON");
        ApiError::BadRequest("Invalid JSON in request body.".to_owned())
    })?;

    let Some((username, password)) = req.credentials() else {
        return Err(ApiError::BadRequest("Username and password are required.".to_owned()));
    };

    if !state.auth.verify(username, password) {
        tracing::warn!(username, "login rejected");
        return Err(ApiError::Unauthorized("Invalid username or password.".to_owned()));
    }

    let cookie = SessionCookie::issue(&state.auth, chrono::Utc::now()).map_err(ApiError::internal)?;
    let cookie = HeaderValue::from_str(&cookie.to_header_value()).map_err(ApiError::internal)?;
    tracing::info!(username, "login succeeded");

    Ok((StatusCode::OK, [(header::SET_COOKIE, cookie)], Json(MessageResponse::new("Login successful.")))
        .into_response())
}

pub async fn logout(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let cookie = SessionCookie::cleared(state.auth.secure_cookies);
    let cookie = HeaderValue::from_str(&cookie.to_header_value()).map_err(|e| ApiError::Internal {
        source: e.into(),
        message: "Logout failed.",
    })?;

    Ok((StatusCode::OK, [(header::SET_COOKIE, cookie)], Json(MessageResponse::new("Logout successful.")))
        .into_response())
}
