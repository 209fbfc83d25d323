use api::routes::{Deployment, routes};
use axum::{Router, body::Body, response::Response};
use db::test_utils::setup_test_db;
use util::state::AppState;

/// In-memory database with the schema applied and the fixed rows seeded.
pub async fn seeded_state() -> AppState {
    let db = setup_test_db().await;
    seeder::seed_if_empty(&db).await.expect("Failed to seed test db");
    AppState::new(db)
}

pub fn make_test_app(deployment: Deployment) -> Router {
    routes(deployment, true)
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}
