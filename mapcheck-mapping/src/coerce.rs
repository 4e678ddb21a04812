use serde_json::{Number, Value};

use crate::model::{FieldMapping, TypedData};

/// 2^53 - 1, the largest integer an f64 holds exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Coerce one raw text value into a typed JSON value.
///
/// Rules are tried in order and the first match wins:
///
/// 1. trimmed text wrapped in `[...]` or `{...}` is parsed as JSON; if that
///    fails the original, untrimmed text is kept as a string
/// 2. `true` / `false` become booleans
/// 3. fully numeric text becomes a number
/// 4. anything else stays the original, untrimmed string
///
/// Numeric parsing does not preserve formatting: `"07"` becomes `7`, and a
/// numeric id such as `"00123"` turns into `123`. Send it through a direct
/// data object when the string form matters.
pub fn coerce_value(raw: &str) -> Value {
    let trimmed = raw.trim();

    if is_json_wrapped(trimmed) {
        return serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(raw.to_string()));
    }

    match trimmed {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    match parse_number(trimmed) {
        Some(n) => Value::Number(n),
        None => Value::String(raw.to_string()),
    }
}

/// Coerce every complete mapping into one object.
///
/// Blank names or values are skipped. A repeated name keeps the value of its
/// last occurrence.
pub fn coerce_mappings(mappings: &[FieldMapping]) -> TypedData {
    let mut data = TypedData::new();
    for mapping in mappings.iter().filter(|m| m.is_complete()) {
        data.insert(mapping.field_name.clone(), coerce_value(&mapping.input_value));
    }
    data
}

fn is_json_wrapped(s: &str) -> bool {
    (s.starts_with('[') && s.ends_with(']')) || (s.starts_with('{') && s.ends_with('}'))
}

fn parse_number(s: &str) -> Option<Number> {
    if s.is_empty() {
        return None;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Some(Number::from(i));
    }

    // f64 parsing also accepts "NaN" and "inf"
    let f = s.parse::<f64>().ok().filter(|f| f.is_finite())?;
    if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER {
        Some(Number::from(f as i64))
    } else {
        Number::from_f64(f)
    }
}
