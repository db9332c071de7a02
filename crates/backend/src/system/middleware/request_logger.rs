use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;
use std::time::Duration;

use crate::shared::format::format_number;

/// Middleware для логирования HTTP запросов
///
/// Выводит в консоль: время, длительность (ms), размер ответа,
/// статус, метод и путь.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            println!(
                "{}",
                format_line(parts.status, &method, &path, start.elapsed(), Some(bytes.len()))
            );
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(_) => {
            println!(
                "{}",
                format_line(parts.status, &method, &path, start.elapsed(), None)
            );
            Response::from_parts(parts, Body::default())
        }
    }
}

/// Голубое время для 2xx, коричневое для остальных и для ошибок чтения тела
fn format_line(
    status: StatusCode,
    method: &Method,
    path: &str,
    elapsed: Duration,
    size: Option<usize>,
) -> String {
    let color_code = if status.is_success() && size.is_some() {
        "36"
    } else {
        "33"
    };
    let size = size.map(format_number).unwrap_or_else(|| "error".to_string());

    format!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        elapsed.as_millis(),
        size,
        status.as_u16(),
        method,
        path
    )
}
