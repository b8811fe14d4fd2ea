use axum::{
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::common::Session;

/// Alternate header for clients that cannot set `Authorization`
pub const USER_TOKEN_HEADER: &str = "x-user-token";

/// Session middleware
///
/// Reads the bearer token from `Authorization` (or `X-User-Token`) and adds a
/// `Session` to request extensions. Verification happens later, when an
/// activity resolves the session; a request without a token still continues.
pub async fn session_middleware(
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let session = extract_session(request.headers());
    debug!(session = ?session, "Request session");

    request.extensions_mut().insert(session);
    next.run(request).await
}

/// Build a session from request headers. `Authorization` wins when both are set.
fn extract_session(headers: &HeaderMap) -> Session {
    [AUTHORIZATION.as_str(), USER_TOKEN_HEADER]
        .into_iter()
        .filter_map(|name| headers.get(name)?.to_str().ok())
        .map(Session::from_header_value)
        .find(|session| session.token().is_some())
        .unwrap_or_default()
}
