use thiserror::Error;

/// Raised while turning the inbound parts into a usable data source
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("Either a data object or field mappings are required")]
    MissingDataSource,

    #[error("data must be a JSON object")]
    DataNotObject,
}

pub type Result<T> = std::result::Result<T, MappingError>;
