use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One user-entered name/value pair, value still raw text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    #[serde(default)]
    pub field_name: String,

    #[serde(default)]
    pub input_value: String,
}

impl FieldMapping {
    pub fn new(field_name: impl Into<String>, input_value: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            input_value: input_value.into(),
        }
    }

    /// Both name and value carry something other than whitespace
    pub fn is_complete(&self) -> bool {
        !self.field_name.trim().is_empty() && !self.input_value.trim().is_empty()
    }
}
