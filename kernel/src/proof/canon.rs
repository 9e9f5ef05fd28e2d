//! Canonical JSON bytes: the single serialization-for-hashing implementation.
//!
//! All report digests in the workspace route through [`canonical_json_bytes`].
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order).
//! 2. Compact form, no whitespace (`{"a":1,"b":2}`).
//! 3. Numbers must be integers (`i64` or `u64`). Floats are rejected so that
//!    number formatting can never drift between platforms.
//! 4. Output is always valid UTF-8.
//!
//! Objects are rebuilt with explicitly sorted keys before writing, so the
//! output does not depend on whether `serde_json` was built with
//! `preserve_order`.

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer.
    NonIntegerNumber { raw: String, path: String },
    /// The underlying writer failed.
    Serialize { detail: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { raw, path } => {
                write!(f, "non-integer number in canonical JSON at {path}: {raw}")
            }
            Self::Serialize { detail } => write!(f, "canonical JSON serialization failed: {detail}"),
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number in `value` is not
/// representable as `i64` or `u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let canonical = canonicalize(value, &mut String::from("$"))?;
    serde_json::to_vec(&canonical).map_err(|e| CanonError::Serialize {
        detail: e.to_string(),
    })
}

/// Validate integers and rebuild every object in sorted key order.
fn canonicalize(
    value: &serde_json::Value,
    path: &mut String,
) -> Result<serde_json::Value, CanonError> {
    match value {
        serde_json::Value::Number(n) if !(n.is_i64() || n.is_u64()) => {
            Err(CanonError::NonIntegerNumber {
                raw: n.to_string(),
                path: path.clone(),
            })
        }
        serde_json::Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let len = path.len();
                path.push_str(&format!("[{i}]"));
                out.push(canonicalize(item, path)?);
                path.truncate(len);
            }
            Ok(serde_json::Value::Array(out))
        }
        serde_json::Value::Object(map) => {
            let mut entries: Vec<(&String, &serde_json::Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
            let mut out = serde_json::Map::new();
            for (key, item) in entries {
                let len = path.len();
                path.push('.');
                path.push_str(key);
                out.insert(key.clone(), canonicalize(item, path)?);
                path.truncate(len);
            }
            Ok(serde_json::Value::Object(out))
        }
        other => Ok(other.clone()),
    }
}
