use axum::body::to_bytes;
use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_size;

/// Middleware для логирования HTTP запросов
///
/// Одна строка на запрос: статус, метод, путь, длительность и размер ответа.
/// Ответы со статусом 4xx/5xx пишутся уровнем warn.
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
            tracing::error!(
                "{} {} {} | {}ms | body error: {}",
                parts.status.as_u16(),
                method,
                path,
                start.elapsed().as_millis(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let elapsed = start.elapsed().as_millis();
    let size = format_size(bytes.len());
    if parts.status.is_client_error() || parts.status.is_server_error() {
        tracing::warn!("{} {} {} | {}ms | {}", parts.status.as_u16(), method, path, elapsed, size);
    } else {
        tracing::info!("{} {} {} | {}ms | {}", parts.status.as_u16(), method, path, elapsed, size);
    }

    Response::from_parts(parts, Body::from(bytes))
}
