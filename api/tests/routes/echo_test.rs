#[cfg(test)]
mod tests {
    use crate::helpers::{body_bytes, make_test_app};
    use api::routes::Deployment;
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn post_echo_returns_body_and_content_type() {
        let req = Request::builder()
            .method("POST")
            .uri("/echo")
            .header(CONTENT_TYPE, "application/json")
            .body(AxumBody::from(r#"{"x":1}"#))
            .unwrap();

        let response = make_test_app(Deployment::Echo).oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(body_bytes(response).await, br#"{"x":1}"#);
    }

    #[tokio::test]
    async fn post_echo_keeps_arbitrary_content_type() {
        let payload = vec![0u8, 159, 146, 150, 255];
        let req = Request::builder()
            .method("POST")
            .uri("/echo")
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(AxumBody::from(payload.clone()))
            .unwrap();

        let response = make_test_app(Deployment::Echo).oneshot(req).await.unwrap();

        assert_eq!(response.headers()[CONTENT_TYPE], "application/octet-stream");
        assert_eq!(body_bytes(response).await, payload);
    }

    #[tokio::test]
    async fn large_bodies_are_not_truncated() {
        let payload = vec![b'a'; 4 * 1024 * 1024];
        let req = Request::builder()
            .method("POST")
            .uri("/echo")
            .header(CONTENT_TYPE, "text/plain")
            .body(AxumBody::from(payload.clone()))
            .unwrap();

        let response = make_test_app(Deployment::Echo).oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await.len(), payload.len());
    }

    #[tokio::test]
    async fn get_echo_is_method_not_allowed() {
        let req = Request::builder()
            .method("GET")
            .uri("/echo")
            .header(CONTENT_TYPE, "application/json")
            .body(AxumBody::from(r#"{"x":1}"#))
            .unwrap();

        let response = make_test_app(Deployment::Echo).oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(
            response.headers()[CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );
        let body = body_bytes(response).await;
        assert_eq!(body, b"method not allowed");
    }

    #[tokio::test]
    async fn echo_is_not_mounted_outside_echo_deployment() {
        let req = Request::builder()
            .method("POST")
            .uri("/echo")
            .body(AxumBody::from("hi"))
            .unwrap();

        let response = make_test_app(Deployment::Static).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
