//! crate public entry

pub mod error;
pub mod model;
pub mod coerce;

pub use crate::coerce::{coerce_mappings, coerce_value};
pub use crate::error::MappingError;
pub use crate::model::{DataSource, FieldMapping, TypedData};
