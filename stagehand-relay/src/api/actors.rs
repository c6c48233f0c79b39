//! Actor and credential API Handlers
//!
//! Pass-through endpoints: each one validates the credential is present,
//! forwards a single call to the platform, and relays the response.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use stagehand_core::domain::actor::{ActorDetail, ActorPage};
use stagehand_core::dto::auth::{KeyValidation, ValidateKeyRequest};

/// Actors fetched per listing call.
const ACTOR_PAGE_LIMIT: u32 = 100;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyQuery {
    #[serde(default)]
    pub api_key: String,
}

fn require_key(api_key: &str) -> ApiResult<()> {
    if api_key.trim().is_empty() {
        return Err(ApiError::BadRequest("API key is required".to_string()));
    }
    Ok(())
}

/// POST /api/validate-key
/// Check a credential against the platform and return the account it
/// belongs to.
pub async fn validate_key(
    State(state): State<AppState>,
    Json(req): Json<ValidateKeyRequest>,
) -> ApiResult<Response> {
    require_key(&req.api_key)?;

    match state.client.validate_token(&req.api_key).await {
        Ok(user) => {
            tracing::debug!("Credential accepted for user {}", user.id);
            Ok(Json(KeyValidation::accepted(user)).into_response())
        }
        Err(e) if e.is_auth() => {
            tracing::info!("Credential rejected by platform");
            Ok((
                StatusCode::UNAUTHORIZED,
                Json(KeyValidation::rejected("Invalid API key")),
            )
                .into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /api/actors?apiKey=...
/// List actors available to the credential's account.
pub async fn list_actors(
    State(state): State<AppState>,
    Query(params): Query<ApiKeyQuery>,
) -> ApiResult<Json<ActorPage>> {
    require_key(&params.api_key)?;

    tracing::debug!("Listing actors");

    let page = state
        .client
        .list_actors(&params.api_key, ACTOR_PAGE_LIMIT)
        .await?;

    Ok(Json(page))
}

/// GET /api/actors/{id}?apiKey=...
/// Get one actor's metadata and declared input schema.
pub async fn get_actor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ApiKeyQuery>,
) -> ApiResult<Json<ActorDetail>> {
    require_key(&params.api_key)?;

    tracing::debug!("Fetching actor: {}", id);

    let detail = state.client.get_actor(&id, &params.api_key).await?;

    Ok(Json(detail))
}
