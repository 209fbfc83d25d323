use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Method, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};

/// ANY /echo
///
/// `POST` returns the request body unchanged with the request's
/// `Content-Type`. Every other method gets `405` and nothing is copied.
///
/// ### Responses
/// - `200 OK` with the echoed body
/// - `405 Method Not Allowed`, plain text
pub async fn echo(method: Method, headers: HeaderMap, body: Bytes) -> Response {
    if method != Method::POST {
        return (StatusCode::METHOD_NOT_ALLOWED, "method not allowed").into_response();
    }

    let mut response = Response::new(Body::from(body));
    if let Some(content_type) = headers.get(CONTENT_TYPE) {
        response
            .headers_mut()
            .insert(CONTENT_TYPE, content_type.clone());
    }
    response
}
