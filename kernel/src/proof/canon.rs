//! Canonical JSON bytes: the single serialization-for-hashing implementation.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order).
//! 2. Compact form, no whitespace: `{"a":1,"b":[2,3]}`.
//! 3. Strings are escaped by `serde_json`'s own string serializer.
//! 4. Numbers must be integers. Floats are rejected so output cannot drift
//!    across platforms or formatter versions.

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanonError {
    /// A JSON number was not an integer.
    #[error("non-integer number in canonical JSON: {raw}")]
    NonIntegerNumber { raw: String },
}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// Key order is imposed here rather than inherited from `serde_json::Map`,
/// whose ordering depends on the `preserve_order` feature.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not an `i64` or
/// `u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let mut out = String::new();
    write_value(&mut out, value)?;
    Ok(out.into_bytes())
}

fn write_value(out: &mut String, value: &serde_json::Value) -> Result<(), CanonError> {
    use serde_json::Value;

    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => {
            if n.is_f64() {
                return Err(CanonError::NonIntegerNumber { raw: n.to_string() });
            }
            out.push_str(&n.to_string());
        }
        Value::String(s) => write_string(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item)?;
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(out, key);
                out.push(':');
                write_value(out, item)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

fn write_string(out: &mut String, s: &str) {
    // Display on a string Value is its escaped, quoted JSON form.
    out.push_str(&serde_json::Value::String(s.to_owned()).to_string());
}
