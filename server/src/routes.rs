//! Sync Routes
//!
//! `GET /api/sync/load?userId=` and `POST /api/sync/save`, the whole
//! protocol. Payloads are opaque JSON apart from a shape check on save;
//! the reducers on the client own the semantics.

use axum::extract::{Query, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::store::StoreError;
use crate::AppState;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("userId required")]
    MissingUserId,
    #[error("invalid data structure")]
    InvalidPayload,
    #[error("valid credential required")]
    Unauthorized,
    #[error("credential does not match userId")]
    Forbidden,
    #[error("failed to load")]
    Load(#[source] StoreError),
    #[error("failed to save")]
    Save(#[source] StoreError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingUserId | ApiError::InvalidPayload => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::Load(_) | ApiError::Save(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Load(err) | ApiError::Save(err) = &self {
            tracing::error!(error = %err, "storage failure");
        }
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Resolve the storage identity for a request.
///
/// With a verifier configured, the bearer credential is mandatory and
/// its verified subject must match the claimed user id. Without one
/// (insecure mode) the claimed id is used directly.
async fn authorize(state: &AppState, headers: &HeaderMap, user_id: &str) -> Result<String, ApiError> {
    let Some(verifier) = &state.verifier else {
        return Ok(user_id.to_string());
    };

    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(ApiError::Unauthorized)?;

    let subject = verifier.verify(bearer).await.map_err(|err| {
        tracing::debug!(error = %err, "credential rejected");
        ApiError::Unauthorized
    })?;

    if subject != user_id {
        return Err(ApiError::Forbidden);
    }
    Ok(subject)
}

#[derive(Deserialize)]
pub struct LoadQuery {
    #[serde(rename = "userId")]
    user_id: Option<String>,
}

/// Load a user's saved board. A user with no prior save gets an empty
/// board, not an error.
pub async fn load(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<LoadQuery>,
) -> Result<Json<Value>, ApiError> {
    let user_id = query.user_id.filter(|id| !id.is_empty()).ok_or(ApiError::MissingUserId)?;
    let identity = authorize(&state, &headers, &user_id).await?;

    let payload = state
        .store
        .load(&identity)
        .map_err(ApiError::Load)?
        .unwrap_or_else(|| json!({ "lists": [] }));
    Ok(Json(payload))
}

#[derive(Deserialize)]
pub struct SaveRequest {
    #[serde(rename = "userId", default)]
    user_id: String,
    data: Option<Value>,
}

fn has_board_shape(data: &Value) -> bool {
    data.is_array() || data.get("lists").is_some_and(Value::is_array)
}

/// Save a user's board wholesale.
pub async fn save(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SaveRequest>,
) -> Result<Json<Value>, ApiError> {
    if request.user_id.is_empty() {
        return Err(ApiError::MissingUserId);
    }
    let data = request.data.filter(has_board_shape).ok_or(ApiError::InvalidPayload)?;
    let identity = authorize(&state, &headers, &request.user_id).await?;

    state.store.save(&identity, &data).map_err(ApiError::Save)?;
    tracing::info!(user = %FileStoreKey(&identity), "board saved");
    Ok(Json(json!({ "ok": true })))
}

// Log the derived storage key rather than the raw external id.
struct FileStoreKey<'a>(&'a str);

impl std::fmt::Display for FileStoreKey<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::store::FileStore::storage_key(self.0))
    }
}
