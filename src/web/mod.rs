pub mod error;
pub mod routes;
pub mod state;

use std::path::Path;

use axum::{
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::web::routes::{activities, index};
use crate::web::state::AppState;

pub use error::AppError;

/// Assembles the full HTTP surface: API routes, `/static` assets and layers.
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index::root_redirect_handler))
        .route("/health", get(index::health_handler))
        .route("/activities", get(activities::list_activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            post(activities::unregister_handler),
        )
        .nest_service(
            "/static",
            get_service(ServeDir::new(static_dir.as_ref())),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
