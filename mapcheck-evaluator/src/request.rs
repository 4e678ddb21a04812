use mapcheck_mapping::{DataSource, FieldMapping, TypedData};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::{EvalError, EvalResult};

/// Inbound check request as the presentation layer sends it
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckInput {
    #[serde(default)]
    pub expression: String,

    /// Raw field/value pairs, coerced before sending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mappings: Option<Vec<FieldMapping>>,

    /// Ready-made data object, sent verbatim; takes priority over `mappings`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl CheckInput {
    pub fn with_mappings(expression: impl Into<String>, mappings: Vec<FieldMapping>) -> Self {
        Self {
            expression: expression.into(),
            mappings: Some(mappings),
            data: None,
        }
    }

    pub fn with_data(expression: impl Into<String>, data: Value) -> Self {
        Self {
            expression: expression.into(),
            mappings: None,
            data: Some(data),
        }
    }

    /// Validate and assemble the outbound body. No I/O.
    pub fn into_request(self) -> EvalResult<EvaluationRequest> {
        if self.expression.trim().is_empty() {
            return Err(EvalError::Validation("Expression is required".into()));
        }
        let source = DataSource::from_parts(self.data, self.mappings)?;
        Ok(EvaluationRequest::new(self.expression, source))
    }
}

/// Body of the remote evaluate call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub expression: String,
    pub data: TypedData,
}

impl EvaluationRequest {
    pub fn new(expression: String, source: DataSource) -> Self {
        Self {
            expression,
            data: source.into_data(),
        }
    }
}
