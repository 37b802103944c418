//! Résumé page, its form controls and the JSON state API.

use axum::{
    extract::State,
    response::{Html, Redirect},
    Form, Json,
};
use serde::Deserialize;

use crate::dispatch::UiEvent;
use crate::engine::Snapshot;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LanguageForm {
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct TagForm {
    pub tag: String,
}

#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    pub theme: String,
}

/// Rejects blank values. The value itself is passed on untrimmed.
fn require(value: String, field: &str) -> Result<String, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(value)
}

/// Applies one event and returns the resulting snapshot.
async fn apply(state: &AppState, event: UiEvent) -> Snapshot {
    let mut dispatcher = state.dispatcher.lock().await;
    dispatcher.dispatch(event);
    dispatcher.engine().snapshot()
}

/// GET /
pub async fn handle_page(State(state): State<AppState>) -> Html<String> {
    let dispatcher = state.dispatcher.lock().await;
    Html(state.template.fill(dispatcher.engine().regions()))
}

/// POST /language
pub async fn handle_language(
    State(state): State<AppState>,
    Form(form): Form<LanguageForm>,
) -> Result<Redirect, AppError> {
    let code = require(form.code, "code")?;
    apply(&state, UiEvent::SelectLanguage(code)).await;
    Ok(Redirect::to("/"))
}

/// POST /filter
pub async fn handle_filter(
    State(state): State<AppState>,
    Form(form): Form<TagForm>,
) -> Result<Redirect, AppError> {
    let tag = require(form.tag, "tag")?;
    apply(&state, UiEvent::ToggleTag(tag)).await;
    Ok(Redirect::to("/"))
}

/// POST /theme
pub async fn handle_theme(
    State(state): State<AppState>,
    Form(form): Form<ThemeForm>,
) -> Result<Redirect, AppError> {
    let theme = require(form.theme, "theme")?;
    apply(&state, UiEvent::SelectTheme(theme)).await;
    Ok(Redirect::to("/"))
}

/// GET /api/v1/state
pub async fn handle_state(State(state): State<AppState>) -> Json<Snapshot> {
    let dispatcher = state.dispatcher.lock().await;
    Json(dispatcher.engine().snapshot())
}

/// POST /api/v1/events
///
/// Body: `{"event": "toggle_tag", "value": "Rust"}` (or `select_language`,
/// `select_theme`). Returns the state after the event.
pub async fn handle_event(
    State(state): State<AppState>,
    Json(event): Json<UiEvent>,
) -> Result<Json<Snapshot>, AppError> {
    let event = match event {
        UiEvent::SelectLanguage(code) => UiEvent::SelectLanguage(require(code, "value")?),
        UiEvent::ToggleTag(tag) => UiEvent::ToggleTag(require(tag, "value")?),
        UiEvent::SelectTheme(theme) => UiEvent::SelectTheme(require(theme, "value")?),
    };
    Ok(Json(apply(&state, event).await))
}
