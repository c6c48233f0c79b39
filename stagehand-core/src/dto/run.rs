//! Run request/response DTOs

use serde::{Deserialize, Serialize};

/// Body of `POST /api/actors/{id}/run`.
///
/// `input` is already coerced to the actor's declared types by the form
/// layer; the relay passes it through unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunActorRequest {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub input: serde_json::Value,
}

/// Response of `POST /api/actors/{id}/run` once the run reached a terminal
/// state.
///
/// `result` is present when the run succeeded and its items were
/// retrievable; `error` carries the reason otherwise ("Run failed",
/// "Run aborted", or the result-unavailable message).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunActorResponse {
    pub run_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<crate::domain::run::RunOutcome> for RunActorResponse {
    fn from(outcome: crate::domain::run::RunOutcome) -> Self {
        Self {
            run_id: outcome.run_id,
            result: outcome.items,
            error: outcome.error_reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_request_defaults_missing_fields() {
        let req: RunActorRequest = serde_json::from_str(r#"{"apiKey":"tok"}"#).unwrap();
        assert_eq!(req.api_key, "tok");
        assert!(req.input.is_null());
    }

    #[test]
    fn test_run_request_keeps_input_opaque() {
        let req: RunActorRequest =
            serde_json::from_str(r#"{"apiKey":"tok","input":{"url":"http://x"}}"#).unwrap();
        assert_eq!(req.input["url"], "http://x");
    }

    #[test]
    fn test_successful_response_omits_error_field() {
        use crate::domain::run::RunOutcome;

        let outcome = RunOutcome::succeeded("r1".to_string(), vec![serde_json::json!({"title":"x"})]);
        let response = RunActorResponse::from(outcome);
        let body = serde_json::to_value(&response).unwrap();

        assert_eq!(body["runId"], "r1");
        assert_eq!(body["result"][0]["title"], "x");
        assert!(body.get("error").is_none());
    }
}
