use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;

pub const X_CALLER_ID: &str = "x-caller-id";

/// Opaque key used to scope rate limiting. The orchestrator never
/// interprets it; here it is derived from a header set by the fronting
/// layer, falling back to the network origin.
#[derive(Debug, Clone)]
pub struct CallerIdentity(pub String);

/// Middleware resolving the caller identity for admission control
pub async fn caller_identity_middleware(mut request: Request, next: Next) -> Response {
    let from_header = request
        .headers()
        .get(X_CALLER_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    let caller_id = from_header.unwrap_or_else(|| {
        request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|info| info.0.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    });

    request.extensions_mut().insert(CallerIdentity(caller_id));
    next.run(request).await
}
