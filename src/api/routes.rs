//! Router and request handlers
//!
//! Handlers are a thin shim over [`ActivityDirectory`]: axum's `Path`
//! extractor percent-decodes the activity name, so `Programming%20Class`
//! reaches the directory as the exact key `Programming Class`.

use crate::api::error_response::ApiError;
use crate::api::headers::paths;
use crate::api::middleware::ApiMiddlewareStack;
use crate::domain::{Activity, ActivityDirectory, DirectorySnapshot, RosterChange};
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{Method, Uri},
    response::Redirect,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    directory: Arc<ActivityDirectory>,
}

impl AppState {
    pub fn new(directory: Arc<ActivityDirectory>) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &ActivityDirectory {
        &self.directory
    }
}

/// Query string of the signup and unregister endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantQuery {
    pub email: Option<String>,
}

impl ParticipantQuery {
    fn email(&self) -> Result<&str, ApiError> {
        self.email
            .as_deref()
            .ok_or(ApiError::MissingQueryParameter { name: "email" })
    }
}

/// Success body of the signup and unregister endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl From<RosterChange> for MessageResponse {
    fn from(change: RosterChange) -> Self {
        Self {
            message: change.to_string(),
        }
    }
}

/// Build the complete application router
pub fn router(directory: Arc<ActivityDirectory>, static_dir: impl Into<PathBuf>) -> Router {
    let static_dir: PathBuf = static_dir.into();
    let routes = Router::new()
        .route(paths::ROOT, get(root_redirect))
        .route(paths::HEALTH, get(health_handler))
        .route(paths::ACTIVITIES, get(list_activities))
        .route(paths::ACTIVITY, get(get_activity))
        .route(paths::SIGNUP, post(signup))
        .route(paths::UNREGISTER, delete(unregister))
        .method_not_allowed_fallback(method_not_allowed)
        .nest_service(paths::STATIC, ServeDir::new(static_dir))
        .fallback(route_not_found)
        .with_state(AppState::new(directory));

    ApiMiddlewareStack::new().apply_to_router(routes)
}

async fn root_redirect() -> Redirect {
    Redirect::temporary(paths::INDEX)
}

async fn health_handler() -> &'static str {
    "OK"
}

async fn list_activities(State(state): State<AppState>) -> Json<DirectorySnapshot> {
    Json(state.directory().list())
}

async fn get_activity(
    State(state): State<AppState>,
    activity_name: Result<Path<String>, PathRejection>,
) -> Result<Json<Activity>, ApiError> {
    let Path(activity_name) = activity_name?;
    Ok(Json(state.directory().get(&activity_name)?))
}

async fn signup(
    State(state): State<AppState>,
    activity_name: Result<Path<String>, PathRejection>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity_name) = activity_name?;
    let Query(query) = query?;
    let change = state.directory().signup(&activity_name, query.email()?)?;
    Ok(Json(change.into()))
}

async fn unregister(
    State(state): State<AppState>,
    activity_name: Result<Path<String>, PathRejection>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity_name) = activity_name?;
    let Query(query) = query?;
    let change = state.directory().unregister(&activity_name, query.email()?)?;
    Ok(Json(change.into()))
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        path: uri.path().to_string(),
    }
}

async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method,
        path: uri.path().to_string(),
    }
}
