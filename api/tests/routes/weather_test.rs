#[cfg(test)]
mod tests {
    use crate::helpers::{body_bytes, make_test_app, seeded_state};
    use api::routes::{Deployment, routes};
    use axum::{
        Router,
        body::Body as AxumBody,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use db::test_utils::setup_test_db;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use util::state::AppState;

    async fn get_index(app: Router) -> (StatusCode, Option<String>, Vec<u8>) {
        let req = Request::builder()
            .method("GET")
            .uri("/")
            .body(AxumBody::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_owned());
        (status, content_type, body_bytes(response).await)
    }

    #[tokio::test]
    async fn lists_first_ten_seeded_rows_in_id_order() {
        let app = make_test_app(Deployment::Database(seeded_state().await));

        let (status, content_type, body) = get_index(app).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));

        let json: Value = serde_json::from_slice(&body).unwrap();
        let records = json.as_array().unwrap();
        assert_eq!(records.len(), 10);

        let ids: Vec<i64> = records.iter().map(|r| r["id"].as_i64().unwrap()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));

        let first = records[0].as_object().unwrap();
        assert_eq!(first.len(), 6);
        assert_eq!(records[0]["city"], "Amsterdam");
        assert_eq!(records[0]["temperature_c"], json!(7.4));
        assert_eq!(records[0]["condition"], "Partly cloudy");
        assert_eq!(records[0]["humidity_pct"], 78);
        assert_eq!(records[0]["wind_speed_kmh"], json!(19.2));

        // Oslo and Copenhagen sit past the limit.
        assert_eq!(records[9]["city"], "Stockholm");
    }

    #[tokio::test]
    async fn empty_table_lists_as_empty_array() {
        let app = make_test_app(Deployment::Database(AppState::new(setup_test_db().await)));

        let (status, content_type, body) = get_index(app).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, b"[]");
    }

    #[tokio::test]
    async fn query_failure_is_500_db_error() {
        let state = seeded_state().await;
        db::exec(state.db(), "DROP TABLE weather", vec![]).await.unwrap();

        let (status, _, body) = get_index(make_test_app(Deployment::Database(state))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, b"db error");
    }

    #[tokio::test]
    async fn undecodable_row_is_500_scan_error() {
        let state = AppState::new(setup_test_db().await);
        db::exec(
            state.db(),
            "INSERT INTO weather (city, temperature, condition, humidity, wind_speed) \
             VALUES ('Nowhere', 1.0, 'Odd', 'very', 2.0)",
            vec![],
        )
        .await
        .unwrap();

        let (status, _, body) = get_index(make_test_app(Deployment::Database(state))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, b"scan error");
    }

    #[tokio::test]
    async fn server_keeps_serving_after_a_failed_request() {
        let state = AppState::new(setup_test_db().await);
        let app = make_test_app(Deployment::Database(state.clone()));

        db::exec(state.db(), "ALTER TABLE weather RENAME TO weather_old", vec![]).await.unwrap();
        let (status, _, _) = get_index(app.clone()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        db::exec(state.db(), "ALTER TABLE weather_old RENAME TO weather", vec![]).await.unwrap();
        let (status, _, body) = get_index(app).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"[]");
    }

    #[tokio::test]
    async fn static_deployments_return_the_fixed_record() {
        let expected = json!({
            "city": "Amsterdam",
            "temperature_c": 7.4,
            "condition": "Partly cloudy",
            "humidity_pct": 78,
            "wind_speed_kmh": 19.2
        });

        for log_requests in [true, false] {
            let (status, content_type, body) =
                get_index(routes(Deployment::Static, log_requests)).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(content_type.as_deref(), Some("application/json"));
            let json: Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(json, expected);
        }
    }

    #[tokio::test]
    async fn index_rejects_other_methods() {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .body(AxumBody::empty())
            .unwrap();

        let response = make_test_app(Deployment::Static).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
