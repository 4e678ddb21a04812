use serde::{Deserialize, Serialize};

/// Placeholder replaced by the resolved token inside an inject format
pub const TOKEN_PLACEHOLDER: &str = "${access_token}";

/// Where the evaluator credential is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Environment variable, read again on every resolution
    Env { var: String },
    /// Value handed in by the embedding code; `setting` names it in errors
    Static { setting: String, token: Option<String> },
}

impl CredentialSource {
    pub fn env(var: impl Into<String>) -> Self {
        CredentialSource::Env { var: var.into() }
    }

    pub fn fixed(setting: impl Into<String>, token: Option<String>) -> Self {
        CredentialSource::Static {
            setting: setting.into(),
            token,
        }
    }

    /// Name of the setting an operator has to fill in
    pub fn setting(&self) -> &str {
        match self {
            CredentialSource::Env { var } => var,
            CredentialSource::Static { setting, .. } => setting,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InjectTarget {
    Header {
        header_name: String,
        format: String,
    },
    Query {
        key: String,
        format: String,
    },
}

impl Default for InjectTarget {
    /// Raw token in `Authorization`, which is what the Lytics API expects
    fn default() -> Self {
        InjectTarget::Header {
            header_name: "Authorization".into(),
            format: TOKEN_PLACEHOLDER.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenResult {
    pub access_token: String,
}
