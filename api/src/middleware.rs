use axum::{
    body::Body,
    extract::{ConnectInfo, FromRequestParts},
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::TypedHeader;
use headers::{Origin, UserAgent};
use std::net::SocketAddr;
use std::time::Instant;
use tracing::{info, warn};

/// Logs one line per request once the handler has answered: method, path,
/// client IP, origin, user agent, status and latency. CORS preflights are skipped.
///
/// Requests driven in-process (tests) carry no `ConnectInfo` and are logged
/// with `ip = "unknown"`. Server errors are logged at `warn`.
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    if parts.method == Method::OPTIONS {
        return next.run(Request::from_parts(parts, body)).await;
    }

    let ip = parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".into());
    let user_agent = TypedHeader::<UserAgent>::from_request_parts(&mut parts, &())
        .await
        .map(|TypedHeader(ua)| ua.to_string())
        .unwrap_or_else(|_| "unknown".into());
    let origin = TypedHeader::<Origin>::from_request_parts(&mut parts, &())
        .await
        .map(|TypedHeader(o)| o.to_string())
        .unwrap_or_else(|_| "unknown".into());
    let method = parts.method.clone();
    let path = parts.uri.path().to_owned();

    let started = Instant::now();
    let response = next.run(Request::from_parts(parts, body)).await;
    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        warn!(%method, %path, %ip, %origin, %user_agent, status, elapsed_ms, "Request failed");
    } else {
        info!(%method, %path, %ip, %origin, %user_agent, status, elapsed_ms, "Request handled");
    }

    response
}
