use axum::body::to_bytes;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;
use std::time::Duration;

use crate::shared::format::format_number;

/// Middleware для логирования HTTP запросов
///
/// Prints one line per request: local time, duration, response size,
/// status, method and path. Cyan time for 200, yellow otherwise.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!("Failed to buffer response body for {}: {}", path, e);
            print_line(parts.status, &method, &path, start.elapsed(), "error");
            return Response::from_parts(parts, Body::default());
        }
    };

    print_line(
        parts.status,
        &method,
        &path,
        start.elapsed(),
        &format_number(bytes.len()),
    );

    Response::from_parts(parts, Body::from(bytes))
}

fn print_line(status: StatusCode, method: &Method, path: &str, elapsed: Duration, size: &str) {
    let color_code = if status == StatusCode::OK { "36" } else { "33" };
    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        elapsed.as_millis(),
        size,
        status.as_u16(),
        method,
        path
    );
}
