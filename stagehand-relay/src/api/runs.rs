//! Run API Handler
//!
//! The one endpoint with real control flow behind it: validates the request
//! locally, hands it to the run driver, and maps the terminal outcome (or
//! drive error) to a response.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use stagehand_core::dto::run::{RunActorRequest, RunActorResponse};

/// POST /api/actors/{id}/run
/// Run an actor and wait for its terminal outcome.
///
/// Holds the request open for the whole start → poll → fetch cycle; the
/// polling budget in the driver bounds how long that can take.
pub async fn run_actor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<RunActorRequest>,
) -> ApiResult<Json<RunActorResponse>> {
    // Local validation happens before any platform call.
    if req.api_key.trim().is_empty() {
        return Err(ApiError::BadRequest("API key is required".to_string()));
    }
    if id.trim().is_empty() {
        return Err(ApiError::BadRequest("Actor ID is required".to_string()));
    }

    // Absent input runs the actor with an empty object.
    let input = if req.input.is_null() {
        serde_json::json!({})
    } else {
        req.input
    };

    tracing::info!("Running actor: {}", id);

    let outcome = state.driver.drive(&id, &req.api_key, &input).await?;

    tracing::info!(
        "Actor {} run {} finished with status {}",
        id,
        outcome.run_id,
        outcome.status
    );

    Ok(Json(RunActorResponse::from(outcome)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;
    use std::time::Duration;

    use crate::service::RunDriver;
    use stagehand_client::PlatformClient;

    fn idle_state() -> AppState {
        // Points at a closed port; validation failures must return before
        // any connection is attempted.
        let client = Arc::new(PlatformClient::new("http://127.0.0.1:1"));
        let driver = Arc::new(RunDriver::new(
            client.clone(),
            Duration::from_secs(2),
            30,
        ));
        AppState { client, driver }
    }

    #[tokio::test]
    async fn test_missing_api_key_rejected_locally() {
        let req = RunActorRequest {
            api_key: String::new(),
            input: serde_json::Value::Null,
        };

        let err = run_actor(
            State(idle_state()),
            Path("abc".to_string()),
            Json(req),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_blank_actor_id_rejected_locally() {
        let req = RunActorRequest {
            api_key: "tok".to_string(),
            input: serde_json::Value::Null,
        };

        let err = run_actor(State(idle_state()), Path("  ".to_string()), Json(req))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
