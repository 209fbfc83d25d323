//! HTTP route entry point.
//!
//! Which routes exist depends on the deployment:
//! - database: `GET /` lists stored records, `GET /health`
//! - static: `GET /` returns one fixed record, `GET /health`
//! - echo: `POST /echo`

use crate::middleware::log_request;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{any, get},
};
use util::state::AppState;

pub mod echo;
pub mod health;
pub mod weather;

/// The route set to serve, with whatever it needs to run.
#[derive(Clone)]
pub enum Deployment {
    Database(AppState),
    Static,
    Echo,
}

/// Builds the complete application router.
///
/// When `log_requests` is set, every route is wrapped in [`log_request`].
pub fn routes(deployment: Deployment, log_requests: bool) -> Router {
    let router = match deployment {
        Deployment::Database(state) => Router::new()
            .route("/", get(weather::list_weather))
            .nest("/health", health::health_routes())
            .with_state(state),
        Deployment::Static => Router::new()
            .route("/", get(weather::static_weather))
            .nest("/health", health::health_routes()),
        Deployment::Echo => Router::new().route(
            "/echo",
            any(echo::echo).layer(DefaultBodyLimit::disable()),
        ),
    };

    if log_requests {
        router.layer(from_fn(log_request))
    } else {
        router
    }
}
