//! public re-export, callers only need `model::*`

pub mod field;
pub mod source;

pub use field::*;
pub use source::*;

use serde_json::{Map, Value};

/// Field name → coerced value, in insertion order
pub type TypedData = Map<String, Value>;
