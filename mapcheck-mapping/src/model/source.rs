use serde_json::Value;

use crate::{
    coerce::coerce_mappings,
    error::{MappingError, Result},
    model::{FieldMapping, TypedData},
};

/// Where the evaluation data comes from
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// Caller already built the object, used as is
    Direct(TypedData),
    /// Raw pairs that still need coercion
    Mappings(Vec<FieldMapping>),
}

impl DataSource {
    /// Pick the source from the optional inbound parts.
    ///
    /// An object in `data` wins over `mappings`. Any other `data` shape
    /// (array, scalar) is ignored when mappings are present and rejected
    /// otherwise.
    pub fn from_parts(data: Option<Value>, mappings: Option<Vec<FieldMapping>>) -> Result<Self> {
        match (data, mappings) {
            (Some(Value::Object(obj)), _) => Ok(DataSource::Direct(obj)),
            (_, Some(mappings)) => Ok(DataSource::Mappings(mappings)),
            (Some(_), None) => Err(MappingError::DataNotObject),
            (None, None) => Err(MappingError::MissingDataSource),
        }
    }

    pub fn into_data(self) -> TypedData {
        match self {
            DataSource::Direct(obj) => obj,
            DataSource::Mappings(mappings) => coerce_mappings(&mappings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn flag_mapping() -> Vec<FieldMapping> {
        vec![FieldMapping::new("flag", "[1,0,1,1]")]
    }

    #[test]
    fn test_direct_object_wins_over_mappings() {
        let data = json!({"flag": "kept verbatim"});
        let source = DataSource::from_parts(Some(data.clone()), Some(flag_mapping())).unwrap();

        assert!(matches!(source, DataSource::Direct(_)));
        assert_eq!(Value::Object(source.into_data()), data);
    }

    #[test]
    fn test_non_object_data_falls_back_to_mappings() {
        let source = DataSource::from_parts(Some(json!([1, 2])), Some(flag_mapping())).unwrap();
        assert_eq!(Value::Object(source.into_data()), json!({"flag": [1, 0, 1, 1]}));
    }

    #[test]
    fn test_non_object_data_alone_is_rejected() {
        let err = DataSource::from_parts(Some(json!("text")), None).unwrap_err();
        assert_eq!(err, MappingError::DataNotObject);
    }

    #[test]
    fn test_missing_both_parts() {
        let err = DataSource::from_parts(None, None).unwrap_err();
        assert_eq!(err, MappingError::MissingDataSource);
        assert_eq!(err.to_string(), "Either a data object or field mappings are required");
    }

    #[test]
    fn test_empty_mappings_are_valid() {
        let source = DataSource::from_parts(None, Some(vec![])).unwrap();
        assert!(source.into_data().is_empty());
    }
}
