use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use log::debug;

use crate::api::{AppState, errors::ApiError};
use crate::catalog::MoodVideos;

/// `GET /api/mood/{mood}`
pub async fn get_mood_videos(
    State(state): State<AppState>,
    mood: Result<Path<String>, PathRejection>,
) -> Result<Json<MoodVideos>, ApiError> {
    let Path(mood) = mood.map_err(|rejection| {
        debug!("Rejected mood path: {rejection}");
        ApiError::BadRequest(rejection.body_text())
    })?;
    let result = state.dataset.lookup(&mood);
    match &result {
        Ok(found) => debug!("Serving {} videos for mood `{mood}`", found.videos.len()),
        Err(e) => debug!("Lookup for mood `{mood}` failed: {e}"),
    }
    Ok(Json(result?))
}

/// Fallback for any path or method no route or static file answers.
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
