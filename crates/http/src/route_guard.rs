//! Session flag middleware in front of every page.

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use bankdash_core::guard::{self, GuardDecision};
use bankdash_core::session::has_session_flag;

/// Redirect according to the guard decision table, otherwise pass through.
pub async fn route_guard(request: Request, next: Next) -> Response {
    let has_flag = has_session_flag(
        request.headers().get_all(header::COOKIE).iter().filter_map(|v| v.to_str().ok()),
    );

    match guard::decide(has_flag, request.uri().path()) {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::Redirect(location) => {
            tracing::debug!(path = %request.uri().path(), %location, has_flag, "route guard redirect");
            Redirect::temporary(&location).into_response()
        },
    }
}
