//! Route handlers

use crate::application::{
    create_document, newest_document_slug, open_document, save_document, search_documents,
};
use crate::domain::render_markdown;
use crate::error::{Result, SlipboxError};
use crate::web::pages::{self, doc_href};
use crate::web::AppState;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;
use std::sync::Arc;

/// Response header the editor script watches for renames
pub const TRIGGER_HEADER: HeaderName = HeaderName::from_static("hx-trigger");

/// Run filesystem work off the async executor
async fn blocking<F, T>(work: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| SlipboxError::Internal(format!("worker failed: {}", e)))?
}

fn redirect(location: String) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

pub async fn health() -> &'static str {
    "ok"
}

/// `/`: jump to the newest document
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Response> {
    let store = state.store.clone();
    let slug = blocking(move || newest_document_slug(&store)).await?;
    Ok(redirect(format!("/doc/{}", urlencoding::encode(&slug))))
}

pub async fn open(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Html<String>> {
    let store = state.store.clone();
    let plugins_dir = state.settings.plugins_dir.clone();
    let view = blocking(move || open_document(&store, &plugins_dir, &slug)).await?;
    Ok(Html(pages::editor_page(&view)))
}

/// `/doc/` with no slug: the newest document's editor page
pub async fn open_newest(state: State<Arc<AppState>>) -> Result<Html<String>> {
    open(state, Path(String::new())).await
}

pub async fn new_document(State(state): State<Arc<AppState>>) -> Result<Response> {
    let store = state.store.clone();
    let name = blocking(move || create_document(&store)).await?;
    Ok(redirect(doc_href(&name)))
}

#[derive(Debug, Deserialize)]
pub struct SaveForm {
    #[serde(default)]
    pub doc: String,
    #[serde(default)]
    pub text: String,
}

pub async fn save(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SaveForm>,
) -> Result<Response> {
    let store = state.store.clone();
    let outcome = blocking(move || save_document(&store, &form.doc, &form.text)).await?;

    let trigger = serde_json::json!({ "documentRenamed": { "doc": outcome.name } });
    Ok((
        StatusCode::NO_CONTENT,
        [(TRIGGER_HEADER, ascii_json(&trigger.to_string()))],
    )
        .into_response())
}

/// Escape non-ASCII characters as `\uXXXX` so the JSON fits in a header
fn ascii_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    out
}

pub async fn search_page() -> Html<String> {
    Html(pages::search_page())
}

#[derive(Debug, Deserialize)]
pub struct FindQuery {
    #[serde(default)]
    pub search: String,
}

pub async fn find(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FindQuery>,
) -> Result<Html<String>> {
    let store = state.store.clone();
    let hits = blocking(move || search_documents(&store, &query.search)).await?;
    Ok(Html(pages::search_results(&hits)))
}

#[derive(Debug, Deserialize)]
pub struct PreviewForm {
    #[serde(default)]
    pub text: String,
}

pub async fn preview(Form(form): Form<PreviewForm>) -> Html<String> {
    Html(render_markdown(&form.text))
}

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
