use std::time::Duration;

use mapcheck_auth::{CredentialSource, InjectTarget};

pub const DEFAULT_EVALUATOR_URL: &str = "https://api.lytics.io/v2/schema/expression/evaluate";
pub const DEFAULT_TOKEN_VAR: &str = "LYTICS_AUTH_TOKEN";
pub const DEFAULT_ERROR_LABEL: &str = "Lytics API error";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything the evaluator needs to reach the remote API
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// Full URL of the evaluate endpoint
    pub endpoint: String,

    /// Prefix of the error message when the remote rejects a request
    pub error_label: String,

    /// Upper bound for one outbound call, connect through body
    pub timeout: Duration,

    pub credential: CredentialSource,

    pub inject: InjectTarget,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_EVALUATOR_URL.to_string(),
            error_label: DEFAULT_ERROR_LABEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            credential: CredentialSource::env(DEFAULT_TOKEN_VAR),
            inject: InjectTarget::default(),
        }
    }
}

impl EvaluatorConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_credential(mut self, credential: CredentialSource) -> Self {
        self.credential = credential;
        self
    }

    pub fn with_inject(mut self, inject: InjectTarget) -> Self {
        self.inject = inject;
        self
    }

    /// Log line; never includes the token itself
    pub fn summary(&self) -> String {
        format!(
            "endpoint={}, timeout={:?}, credential={}",
            self.endpoint,
            self.timeout,
            self.credential.setting()
        )
    }
}
