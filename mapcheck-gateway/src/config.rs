use anyhow::{anyhow, Result};
use std::{env, time::Duration};

use mapcheck_auth::{CredentialSource, InjectTarget, TOKEN_PLACEHOLDER};
use mapcheck_evaluator::{
    config::{DEFAULT_ERROR_LABEL, DEFAULT_EVALUATOR_URL, DEFAULT_TOKEN_VAR},
    EvaluatorConfig,
};

const DEFAULT_BIND: &str = "127.0.0.1:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Gateway settings, read once at startup.
///
/// The credential itself is not read here; only the name of the variable
/// holding it. The evaluator reads that variable on every request.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub bind: String,
    pub evaluator: EvaluatorConfig,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let timeout_secs = match lookup("MAPCHECK_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|&s| s > 0)
                .ok_or_else(|| anyhow!("Invalid MAPCHECK_TIMEOUT_SECS: {:?} (expected a positive integer)", raw))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let evaluator = EvaluatorConfig {
            endpoint: var("MAPCHECK_EVALUATOR_URL", DEFAULT_EVALUATOR_URL),
            error_label: var("MAPCHECK_EVALUATOR_LABEL", DEFAULT_ERROR_LABEL),
            timeout: Duration::from_secs(timeout_secs),
            credential: CredentialSource::env(var("MAPCHECK_TOKEN_VAR", DEFAULT_TOKEN_VAR)),
            inject: InjectTarget::Header {
                header_name: "Authorization".into(),
                format: var("MAPCHECK_AUTH_FORMAT", TOKEN_PLACEHOLDER),
            },
        };

        Ok(Self {
            bind: var("MAPCHECK_BIND", DEFAULT_BIND),
            evaluator,
        })
    }

    pub fn summary(&self) -> String {
        format!("bind={}, {}", self.bind, self.evaluator.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Result<GatewayConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GatewayConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_with(&[]).unwrap();

        assert_eq!(config.bind, "127.0.0.1:3000");
        assert_eq!(config.evaluator.endpoint, DEFAULT_EVALUATOR_URL);
        assert_eq!(config.evaluator.error_label, "Lytics API error");
        assert_eq!(config.evaluator.timeout, Duration::from_secs(30));
        assert_eq!(config.evaluator.credential, CredentialSource::env("LYTICS_AUTH_TOKEN"));
        assert_eq!(config.evaluator.inject, InjectTarget::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_with(&[
            ("MAPCHECK_BIND", "0.0.0.0:8080"),
            ("MAPCHECK_EVALUATOR_URL", " http://localhost:9000/eval "),
            ("MAPCHECK_TIMEOUT_SECS", "5"),
            ("MAPCHECK_TOKEN_VAR", "EVAL_TOKEN"),
            ("MAPCHECK_AUTH_FORMAT", "Bearer ${access_token}"),
        ])
        .unwrap();

        assert_eq!(config.bind, "0.0.0.0:8080");
        assert_eq!(config.evaluator.endpoint, "http://localhost:9000/eval");
        assert_eq!(config.evaluator.timeout, Duration::from_secs(5));
        assert_eq!(config.evaluator.credential.setting(), "EVAL_TOKEN");
        assert_eq!(
            config.evaluator.inject,
            InjectTarget::Header {
                header_name: "Authorization".into(),
                format: "Bearer ${access_token}".into(),
            }
        );
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        assert!(config_with(&[("MAPCHECK_TIMEOUT_SECS", "soon")]).is_err());
        assert!(config_with(&[("MAPCHECK_TIMEOUT_SECS", "0")]).is_err());
    }

    #[test]
    fn test_summary_omits_token() {
        let config = config_with(&[]).unwrap();
        let summary = config.summary();
        assert!(summary.contains("LYTICS_AUTH_TOKEN"));
        assert!(summary.contains("bind=127.0.0.1:3000"));
    }
}
