//! Run driver
//!
//! Drives one remote actor run from start to a terminal state: submit the
//! run, poll its status at a fixed interval with a hard attempt ceiling,
//! fetch results only after a successful finish.
//!
//! Each incoming request gets its own `drive` invocation with its own
//! attempt counter; invocations share nothing mutable, so any number of runs
//! can be in flight concurrently.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use tokio::time;
use tracing::{debug, info, warn};

use stagehand_client::{ClientError, RunApi};
use stagehand_core::domain::run::{RunHandle, RunOutcome, RunStatus};

/// Errors that end a drive without a terminal run outcome
#[derive(Debug, Error)]
pub enum DriveError {
    /// The start call failed; never retried
    #[error("Failed to start run: {0}")]
    Start(ClientError),

    /// A status check failed mid-poll
    #[error("Failed to check run status: {0}")]
    Poll(ClientError),

    /// The run was still in progress after the attempt ceiling
    #[error("Run timed out after {attempts} status checks")]
    TimedOut { attempts: u32 },
}

impl DriveError {
    /// Check if the underlying cause was a rejected credential
    pub fn is_auth(&self) -> bool {
        match self {
            DriveError::Start(e) | DriveError::Poll(e) => e.is_auth(),
            DriveError::TimedOut { .. } => false,
        }
    }
}

/// Drives remote runs to completion against a [`RunApi`]
pub struct RunDriver {
    api: Arc<dyn RunApi>,
    poll_interval: Duration,
    max_attempts: u32,
}

impl RunDriver {
    /// Creates a new run driver
    pub fn new(api: Arc<dyn RunApi>, poll_interval: Duration, max_attempts: u32) -> Self {
        Self {
            api,
            poll_interval,
            max_attempts,
        }
    }

    /// Runs an actor and waits for a terminal outcome.
    ///
    /// The total wait is bounded by `max_attempts * poll_interval`. Exactly
    /// one outcome or one error is produced per invocation:
    /// - run finished (succeeded, failed, or aborted) → `Ok(RunOutcome)`
    /// - start or status call failed, or the ceiling was hit → `Err`
    pub async fn drive(
        &self,
        actor_id: &str,
        token: &str,
        input: &Value,
    ) -> Result<RunOutcome, DriveError> {
        let handle = self
            .api
            .start_run(actor_id, token, input)
            .await
            .map_err(DriveError::Start)?;

        info!(actor_id, run_id = %handle.run_id, "Run started");

        let mut attempts = 0;
        while attempts < self.max_attempts {
            attempts += 1;

            time::sleep(self.poll_interval).await;

            let info = self
                .api
                .run_info(&handle.run_id, token)
                .await
                .map_err(DriveError::Poll)?;

            debug!(run_id = %handle.run_id, status = %info.status, attempts, "Polled run status");

            match info.status {
                RunStatus::Running => continue,
                RunStatus::Succeeded => {
                    return Ok(self.collect_items(&handle, token).await);
                }
                RunStatus::Failed | RunStatus::Aborted => {
                    info!(run_id = %handle.run_id, status = %info.status, "Run finished unsuccessfully");
                    return Ok(RunOutcome::unsuccessful(handle.run_id, info.status));
                }
            }
        }

        warn!(run_id = %handle.run_id, attempts, "Run still in progress, giving up");
        Err(DriveError::TimedOut { attempts })
    }

    /// Fetches result items for a succeeded run, retrying the fetch once.
    ///
    /// A run that succeeded remotely stays a success even when its results
    /// cannot be retrieved; the outcome then carries an explicit reason
    /// instead of an empty item list.
    async fn collect_items(&self, handle: &RunHandle, token: &str) -> RunOutcome {
        let first = match self.api.run_items(&handle.run_id, token).await {
            Ok(items) => return RunOutcome::succeeded(handle.run_id.clone(), items),
            Err(e) => e,
        };

        warn!(run_id = %handle.run_id, error = %first, "Result fetch failed, retrying once");

        match self.api.run_items(&handle.run_id, token).await {
            Ok(items) => RunOutcome::succeeded(handle.run_id.clone(), items),
            Err(e) => {
                warn!(run_id = %handle.run_id, error = %e, "Result fetch failed again");
                RunOutcome::result_unavailable(handle.run_id.clone())
            }
        }
    }
}
