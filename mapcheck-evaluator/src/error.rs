use mapcheck_auth::AuthError;
use mapcheck_mapping::MappingError;
use reqwest::StatusCode;
use thiserror::Error;

pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Debug, Error)]
pub enum EvalError {
    /// Caller input is unusable; no request was sent
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Config(#[from] AuthError),

    /// Remote evaluator answered outside 2xx
    #[error("{label}: {status} {reason}. {body}")]
    Remote {
        label: String,
        status: u16,
        reason: String,
        body: String,
    },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Internal(String),
}

impl From<MappingError> for EvalError {
    fn from(err: MappingError) -> Self {
        EvalError::Validation(err.to_string())
    }
}

impl EvalError {
    pub fn remote(label: &str, status: StatusCode, body: String) -> Self {
        EvalError::Remote {
            label: label.to_string(),
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            EvalError::Validation(_) => "BAD_REQUEST",
            EvalError::Config(_) => "CONFIG_ERROR",
            EvalError::Remote { .. } => "REMOTE_ERROR",
            EvalError::Transport(_) | EvalError::Json(_) | EvalError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            EvalError::Validation(_) => StatusCode::BAD_REQUEST,
            EvalError::Remote { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            EvalError::Config(_)
            | EvalError::Transport(_)
            | EvalError::Json(_)
            | EvalError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
