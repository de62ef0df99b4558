//! Public media downloads.
use axum::{
    body::Body,
    extract::{Path, State},
    http::{
        header::{ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL, CONTENT_LENGTH, CONTENT_TYPE},
        HeaderValue,
    },
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio_util::io::ReaderStream;

use crate::{services::media, state::AppState, utils::httperror::HttpError};

/// Media filenames are content-addressed once published, so they never change.
const CACHE_CONTROL_IMMUTABLE: &str = "public, max-age=31536000, immutable";

/// Create a router for routes under the media prefix.
pub fn create_router() -> Router<AppState> {
    Router::new().route("/{*path}", get(serve_media))
}

/// Stream a file from the media root.
async fn serve_media(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, HttpError> {
    let media = media::open(&state.media_root, &path).await?;
    let content_type = HeaderValue::try_from(media.content_type.as_ref())
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));
    Ok((
        [
            (CONTENT_TYPE, content_type),
            (CONTENT_LENGTH, HeaderValue::from(media.len)),
            (CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL_IMMUTABLE)),
            (ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*")),
        ],
        Body::from_stream(ReaderStream::new(media.file)),
    )
        .into_response())
}
