use axum::{Router, middleware, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{middleware as app_middleware, state::AppState};

pub mod calls;
pub mod health;
pub mod templates;


pub fn router(state: AppState) -> Router {
    let base_routes = Router::new()
        .route("/health", get(health::health_check))
        .merge(calls::router())
        .merge(templates::router())
        .with_state(state);

    Router::new()
        .nest("/api", base_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(app_middleware::request_id_middleware))
}
