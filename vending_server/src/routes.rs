use crate::handlers;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub fn app() -> Router {
    let api = Router::new()
        .route("/purchase", post(handlers::purchase))
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
}
