//! Route handlers for one sport's backend.
//!
//! Every handler wraps a single store call. Success envelopes differ per
//! endpoint and are part of the contract: `{"mensaje"}` for home, the
//! about payload for `/acercade`, the store's page envelope for the list
//! endpoints, and the raw document envelope for everything that returns
//! one document.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use rosterhub_store::{page_to_wire, DocumentStore};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::body::{decode_object, split_id};
use crate::config::{About, SportConfig};
use crate::error::ServiceError;

/// Shared state: the sport's config plus its document store.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SportConfig>,
    pub store: Arc<dyn DocumentStore>,
}

/// Builds the backend router for one sport.
///
/// CORS is permissive on every route (the browser front-end is served from
/// a different origin than the gateway).
pub fn router(config: SportConfig, store: Arc<dyn DocumentStore>) -> Router {
    let state = AppState {
        config: Arc::new(config),
        store,
    };
    Router::new()
        .route("/", get(home))
        .route("/acercade", get(about))
        .route("/test_db", get(test_db))
        .route("/getTodas", get(get_all))
        .route("/getPorId/{id}", get(get_by_id))
        .route("/setTodo", post(set_all))
        .route("/crear", post(create))
        .route("/borrar/{id}", delete(remove))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home(State(state): State<AppState>) -> Json<Value> {
    Json(json!({"mensaje": state.config.home_message()}))
}

async fn about(State(state): State<AppState>) -> Json<About> {
    Json(state.config.about.clone())
}

/// Store connectivity probe: returns the whole collection, like `getTodas`.
async fn test_db(State(state): State<AppState>) -> Result<Json<Value>, ServiceError> {
    let documents = state.store.list().await?;
    Ok(Json(page_to_wire(&documents)))
}

async fn get_all(State(state): State<AppState>) -> Result<Json<Value>, ServiceError> {
    let documents = state.store.list().await?;
    Ok(Json(page_to_wire(&documents)))
}

async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ServiceError> {
    let document = state.store.get(&id).await?;
    Ok(Json(document.to_wire()))
}

/// Replaces every field of one document. The id travels inside the body
/// under the sport's id key.
async fn set_all(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ServiceError> {
    let decoded = decode_object(&body)?;
    let (id, data) = split_id(decoded, &state.config.id_field)?;
    let document = state.store.update(&id, data).await?;
    Ok(Json(document.to_wire()))
}

async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ServiceError> {
    let decoded = decode_object(&body)?;
    let document = state.store.create(Value::Object(decoded)).await?;
    Ok(Json(document.to_wire()))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ServiceError> {
    let document = state.store.delete(&id).await?;
    Ok(Json(document.to_wire()))
}
