/// JSON error responses
pub mod errors;
/// Request handlers
pub mod routes;

use std::{path::Path, sync::Arc};

use axum::{Router, handler::HandlerWithoutStateExt, routing::get};
use tower_http::{catch_panic::CatchPanicLayer, services::ServeDir};

use crate::catalog::MusicDataset;

/// State shared by every handler. The dataset is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<MusicDataset>,
}

impl AppState {
    pub fn new(dataset: MusicDataset) -> Self {
        AppState {
            dataset: Arc::new(dataset),
        }
    }
}

/// Builds the application router.
///
/// When `public_dir` is set, any path not claimed by an API route is looked
/// up there first; everything else, including unsupported methods, falls
/// through to a JSON `404`.
pub fn build_router(state: AppState, public_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/api/mood/{mood}", get(routes::get_mood_videos))
        .method_not_allowed_fallback(routes::route_not_found)
        .layer(CatchPanicLayer::custom(errors::panic_response))
        .with_state(state);

    match public_dir {
        Some(dir) => router.fallback_service(
            ServeDir::new(dir)
                .not_found_service(routes::route_not_found.into_service())
                .call_fallback_on_method_not_allowed(true),
        ),
        None => router.fallback(routes::route_not_found),
    }
}
