use api_state::ApiState;
use axum::{
    extract::FromRef,
    routing::{get, post},
    Router,
};
use routes::{ask::ask_guru, gurus::list_gurus, health::health, index::root};

pub mod api_state;
pub mod error;
mod routes;

/// Router for the guru chat API.
pub fn api_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    ApiState: FromRef<S>,
{
    // Probes (root message + db health)
    let probes = Router::new()
        .route("/", get(root))
        .route("/health", get(health));

    // Chat API endpoints
    let api = Router::new()
        .route("/api/gurus", get(list_gurus))
        .route("/api/ask", post(ask_guru));

    probes.merge(api)
}
