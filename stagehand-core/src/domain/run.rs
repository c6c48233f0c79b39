//! Run domain types
//!
//! A "run" is a single remote execution of an actor. The relay never owns the
//! run itself; it only holds the identifier the platform hands back and a
//! snapshot of the status it last observed.

use serde::{Deserialize, Serialize};

/// Status of a remote actor run as reported by the platform.
///
/// Only the three terminal states matter to the relay. Anything else the
/// platform reports (`READY`, `TIMING-OUT`, ...) deserializes as `Running`
/// and keeps the poll loop going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    Succeeded,
    Failed,
    Aborted,
    #[serde(other)]
    Running,
}

impl RunStatus {
    /// True once the platform will no longer change the status.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RunStatus::Running)
    }

    /// Status name as the platform spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Running => "RUNNING",
            RunStatus::Succeeded => "SUCCEEDED",
            RunStatus::Failed => "FAILED",
            RunStatus::Aborted => "ABORTED",
        }
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle to a started run. The only state carried between polls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunHandle {
    #[serde(rename = "id")]
    pub run_id: String,
}

/// Run record as returned by the platform's status endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunInfo {
    pub id: String,
    pub status: RunStatus,
    #[serde(default)]
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub finished_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Final outcome of one orchestrated run.
///
/// `items` is present only when the run succeeded and its results were
/// retrievable; `error_reason` is present in every other case so callers
/// never see an empty, ambiguous outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutcome {
    pub run_id: String,
    pub status: RunStatus,
    pub items: Option<Vec<serde_json::Value>>,
    pub error_reason: Option<String>,
}

impl RunOutcome {
    /// Outcome for a run that succeeded with retrievable results.
    pub fn succeeded(run_id: String, items: Vec<serde_json::Value>) -> Self {
        Self {
            run_id,
            status: RunStatus::Succeeded,
            items: Some(items),
            error_reason: None,
        }
    }

    /// Outcome for a run the platform reports as failed or aborted.
    pub fn unsuccessful(run_id: String, status: RunStatus) -> Self {
        let reason = format!("Run {}", status.as_str().to_lowercase());
        Self {
            run_id,
            status,
            items: None,
            error_reason: Some(reason),
        }
    }

    /// Outcome for a run that succeeded but whose results could not be
    /// retrieved. Distinct from both success and remote failure.
    pub fn result_unavailable(run_id: String) -> Self {
        Self {
            run_id,
            status: RunStatus::Succeeded,
            items: None,
            error_reason: Some("Run succeeded but results could not be retrieved".to_string()),
        }
    }
}
