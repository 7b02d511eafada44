use crate::{
    config::Config,
    error::AppError,
    frame::{self, render, Action},
    models::frame::{FrameActionPayload, FrameQuery},
    providers::StatsFetcher,
};
use axum::{
    body::Bytes,
    extract::{Query, State},
    response::Html,
};
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub fetcher: StatsFetcher,
}

impl AppState {
    pub fn new(config: Config, http_client: reqwest::Client) -> Self {
        let fetcher = StatsFetcher::new(http_client, &config.upstream);
        Self {
            config: Arc::new(config),
            fetcher,
        }
    }
}

/// Handle GET /api
///
/// Without an `action` query parameter this is the initial frame.
pub async fn frame_view(
    State(state): State<AppState>,
    Query(query): Query<FrameQuery>,
) -> Result<Html<String>, AppError> {
    let action = Action::from_selector(query.action.as_deref());
    respond(&state, action).await
}

/// Handle POST /api (a button press)
pub async fn frame_action(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Html<String>, AppError> {
    let payload: FrameActionPayload = serde_json::from_slice(&body)?;
    let action = Action::from_button_index(payload.untrusted_data.button_index);

    tracing::debug!(
        button_index = payload.untrusted_data.button_index,
        fid = ?payload.untrusted_data.fid,
        "Received frame action"
    );

    respond(&state, action).await
}

async fn respond(state: &AppState, action: Action) -> Result<Html<String>, AppError> {
    tracing::info!(action = %action, "Handling frame request");

    let message =
        frame::dispatch(action, &state.fetcher, &state.config.frame.welcome_message).await;
    let html = render::render_frame_html(&state.config.frame.public_url, &message)
        .map_err(AppError::InternalError)?;

    Ok(Html(html))
}
