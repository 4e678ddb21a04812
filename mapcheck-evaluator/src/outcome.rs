use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::EvalError;

/// The only shape handed back to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "OutcomeBody", try_from = "OutcomeBody")]
pub enum EvaluationOutcome {
    Success { result: Value },
    Failure { error: String },
}

impl EvaluationOutcome {
    pub fn success(result: Value) -> Self {
        EvaluationOutcome::Success { result }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        EvaluationOutcome::Failure { error: error.into() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, EvaluationOutcome::Success { .. })
    }

    pub fn result(&self) -> Option<&Value> {
        match self {
            EvaluationOutcome::Success { result } => Some(result),
            EvaluationOutcome::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            EvaluationOutcome::Success { .. } => None,
            EvaluationOutcome::Failure { error } => Some(error),
        }
    }
}

/// Wire form: `{success: true, result}` or `{success: false, error}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OutcomeBody {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<EvaluationOutcome> for OutcomeBody {
    fn from(outcome: EvaluationOutcome) -> Self {
        match outcome {
            EvaluationOutcome::Success { result } => OutcomeBody {
                success: true,
                result: Some(result),
                error: None,
            },
            EvaluationOutcome::Failure { error } => OutcomeBody {
                success: false,
                result: None,
                error: Some(error),
            },
        }
    }
}

impl TryFrom<OutcomeBody> for EvaluationOutcome {
    type Error = String;

    fn try_from(body: OutcomeBody) -> Result<Self, Self::Error> {
        if body.success {
            Ok(EvaluationOutcome::Success {
                result: body.result.unwrap_or(Value::Null),
            })
        } else {
            body.error
                .map(|error| EvaluationOutcome::Failure { error })
                .ok_or_else(|| "failed outcome without `error`".to_string())
        }
    }
}

/// Outcome plus the HTTP status the caller should relay
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReply {
    pub status: StatusCode,
    pub outcome: EvaluationOutcome,
}

impl CheckReply {
    pub fn success(result: Value) -> Self {
        Self {
            status: StatusCode::OK,
            outcome: EvaluationOutcome::success(result),
        }
    }
}

impl From<EvalError> for CheckReply {
    fn from(err: EvalError) -> Self {
        Self {
            status: err.status_code(),
            outcome: EvaluationOutcome::failure(err.to_string()),
        }
    }
}
