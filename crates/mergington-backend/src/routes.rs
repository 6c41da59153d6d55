use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    http::{Method, header},
    response::Redirect,
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{AppState, handlers};

const INDEX_PATH: &str = "/static/index.html";

fn cors() -> CorsLayer {
    let origins = if cfg!(debug_assertions) {
        let dev_ports = vec![3000, 8000, 8080, 8081, 5173];
        let mut allowed_origins = Vec::new();
        for port in dev_ports {
            allowed_origins.push(format!("http://localhost:{}", port));
            allowed_origins.push(format!("http://127.0.0.1:{}", port));
        }
        allowed_origins
    } else {
        // Production origins - add your domains here
        vec![]
    };

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            origins.iter().filter_map(|origin| origin.parse().ok()),
        ))
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
}

fn activity_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/activities", get(handlers::activities::list))
        .route(
            "/activities/{activity_name}/signup",
            axum::routing::post(handlers::activities::signup)
                .delete(handlers::activities::unregister),
        )
}

/// Setup the routes for the server, serving the front-end from `static_dir`
pub fn setup_routes(state: Arc<AppState>, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PATH) }))
        .route("/health", get(handlers::health::get))
        .merge(activity_routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors()),
        )
        .with_state(state)
}
