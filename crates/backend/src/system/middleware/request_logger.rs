use axum::body::to_bytes;
use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_size;

/// Logs every HTTP request: status, method, path, response size and duration.
///
/// Non-2xx responses are logged at WARN so rejected enquiries stand out.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Buffer the body to learn its real size
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                status = parts.status.as_u16(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "{} {} - failed to read response body: {}",
                method,
                uri.path(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let elapsed_ms = start.elapsed().as_millis() as u64;
    let size = format_size(bytes.len());
    if parts.status.is_success() {
        tracing::info!(
            status = parts.status.as_u16(),
            elapsed_ms,
            size = %size,
            "{} {}",
            method,
            uri.path()
        );
    } else {
        tracing::warn!(
            status = parts.status.as_u16(),
            elapsed_ms,
            size = %size,
            "{} {}",
            method,
            uri.path()
        );
    }

    Response::from_parts(parts, Body::from(bytes))
}
