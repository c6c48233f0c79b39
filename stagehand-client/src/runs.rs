//! Run lifecycle API endpoints
//!
//! The three calls the run driver sequences: start a run, read its status,
//! fetch its result items. Each is one outbound request with no retries;
//! the driver owns all retry/timeout policy.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::PlatformClient;
use crate::error::Result;
use stagehand_core::domain::run::{RunHandle, RunInfo};

/// Run lifecycle operations against the remote platform.
///
/// `PlatformClient` is the real implementation; the trait exists so the
/// relay's run driver can be exercised against a scripted double.
#[async_trait]
pub trait RunApi: Send + Sync {
    /// Start a run of the given actor with the supplied input.
    async fn start_run(&self, actor_id: &str, token: &str, input: &Value) -> Result<RunHandle>;

    /// Get the current record of a run, including its status.
    async fn run_info(&self, run_id: &str, token: &str) -> Result<RunInfo>;

    /// Fetch the result items of a run's default dataset.
    ///
    /// Only meaningful after the run has succeeded.
    async fn run_items(&self, run_id: &str, token: &str) -> Result<Vec<Value>>;
}

#[async_trait]
impl RunApi for PlatformClient {
    async fn start_run(&self, actor_id: &str, token: &str, input: &Value) -> Result<RunHandle> {
        let url = format!("{}/v2/acts/{}/runs", self.base_url(), actor_id);
        debug!(actor_id, "Starting actor run");

        let response = self
            .http()
            .post(&url)
            .bearer_auth(token)
            .json(input)
            .send()
            .await?;

        self.handle_enveloped(response).await
    }

    async fn run_info(&self, run_id: &str, token: &str) -> Result<RunInfo> {
        let url = format!("{}/v2/actor-runs/{}", self.base_url(), run_id);
        debug!(run_id, "Checking run status");

        let response = self.http().get(&url).bearer_auth(token).send().await?;

        self.handle_enveloped(response).await
    }

    async fn run_items(&self, run_id: &str, token: &str) -> Result<Vec<Value>> {
        // Dataset items come back as a bare JSON array, not enveloped.
        let url = format!("{}/v2/actor-runs/{}/dataset/items", self.base_url(), run_id);
        debug!(run_id, "Fetching run results");

        let response = self.http().get(&url).bearer_auth(token).send().await?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use stagehand_core::domain::run::{RunHandle, RunInfo, RunStatus};

    use crate::Envelope;

    #[test]
    fn test_start_run_response_parses() {
        // Shape of POST /v2/acts/{id}/runs
        let envelope: Envelope<RunHandle> = serde_json::from_str(
            r#"{"data":{"id":"r1","actId":"a1","status":"READY"}}"#,
        )
        .unwrap();
        assert_eq!(envelope.data.run_id, "r1");
    }

    #[test]
    fn test_run_info_response_parses() {
        // Shape of GET /v2/actor-runs/{id}
        let envelope: Envelope<RunInfo> = serde_json::from_str(
            r#"{"data":{"id":"r1","status":"SUCCEEDED","finishedAt":"2025-01-01T00:00:10.000Z"}}"#,
        )
        .unwrap();
        assert_eq!(envelope.data.status, RunStatus::Succeeded);
    }

    #[test]
    fn test_dataset_items_are_a_bare_array() {
        let items: Vec<serde_json::Value> =
            serde_json::from_str(r#"[{"title":"x"},{"title":"y"}]"#).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["title"], "x");
    }
}
