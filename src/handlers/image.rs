use crate::{frame::render, handlers::AppState, models::frame::ImageQuery};
use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};

/// Handle GET /api/image
pub async fn frame_image(
    State(state): State<AppState>,
    Query(query): Query<ImageQuery>,
) -> impl IntoResponse {
    let text = query
        .text
        .unwrap_or_else(|| state.config.frame.welcome_message.clone());

    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "max-age=0"),
        ],
        render::render_svg(&text),
    )
}
