//! HTTP handlers for the form server

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    Form, Json,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;

const FORM_PAGE: &str = include_str!("../templates/form.html");

/// Blank input form
pub async fn form_page() -> Html<&'static str> {
    Html(FORM_PAGE)
}

/// Render the submitted form as a DOCX attachment
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<impl IntoResponse, ApiError> {
    let bytes = form_renderer::render_fields(&fields, &state.policy, &state.config)?;

    tracing::info!(fields = fields.len(), bytes = bytes.len(), "generated form A");

    Ok((
        [
            (header::CONTENT_TYPE, form_renderer::CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, form_renderer::content_disposition()),
        ],
        bytes,
    ))
}

/// Health check endpoint
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
