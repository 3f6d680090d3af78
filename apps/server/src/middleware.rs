//! HTTP 中间件

use axum::extract::Request;
use axum::http::{HeaderValue, header};
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;

/// 请求日志：处理完成后记录 `状态码 方法 URI`
pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    info!("{} {} {}", response.status().as_u16(), method, uri);
    response
}

/// 所有响应统一使用 `Content-Type: application/json`
pub async fn json_content_type(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}
