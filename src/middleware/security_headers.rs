// Security headers middleware
// Every response is either JSON, plain text or the tracking GIF, so nothing needs to load sub-resources.

use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};
use axum::http::{HeaderName, HeaderValue};

pub async fn security_headers_middleware(
    req: Request,
    next: Next,
) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    // X-Content-Type-Options: Prevent MIME type sniffing
    headers.insert(
        HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff")
    );

    // X-Frame-Options: Prevent clickjacking
    headers.insert(
        HeaderName::from_static("x-frame-options"),
        HeaderValue::from_static("DENY")
    );

    headers.insert(
        HeaderName::from_static("content-security-policy"),
        HeaderValue::from_static("default-src 'none'; frame-ancestors 'none'")
    );

    // Keep pixel ids out of Referer headers
    headers.insert(
        HeaderName::from_static("referrer-policy"),
        HeaderValue::from_static("no-referrer")
    );

    response
}
