//! Canonical config hashing.
//!
//! A run is a pure function of its config, so the config hash identifies the
//! generated tables:
//! - Config canonicalization (sorted keys, no whitespace)
//! - BLAKE3 hashing of the canonical form

use crate::config::GenerationConfig;
use crate::error::SpecError;

/// Computes the canonical BLAKE3 hash of a generation config.
///
/// ```text
/// config_hash = hex(BLAKE3(canonical_json(config)))
/// ```
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
///
/// # Example
/// ```
/// use bandtable_spec::{canonical_config_hash, GenerationConfig, Waveform};
///
/// let config = GenerationConfig::new(48000, 10, Waveform::Saw);
/// let hash = canonical_config_hash(&config).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_config_hash(config: &GenerationConfig) -> Result<String, SpecError> {
    let value = config.to_value()?;
    Ok(canonical_value_hash(&value))
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> String {
    let canonical = canonicalize_json(value);
    blake3::hash(canonical.as_bytes()).to_hex().to_string()
}

/// Canonicalizes a JSON value: object keys sorted, no whitespace,
/// integer-valued floats printed without a fraction.
pub fn canonicalize_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => format_number(n),
        serde_json::Value::String(s) => serde_json::Value::String(s.clone()).to_string(),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(canonicalize_json).collect();
            format!("[{}]", items.join(","))
        }
        serde_json::Value::Object(obj) => {
            let mut entries: Vec<(&String, &serde_json::Value)> = obj.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            let pairs: Vec<String> = entries
                .into_iter()
                .map(|(k, v)| {
                    format!(
                        "{}:{}",
                        serde_json::Value::String(k.clone()),
                        canonicalize_json(v)
                    )
                })
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
    }
}

fn format_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", f as i64)
        }
        Some(f) if f.is_finite() => format!("{}", f),
        _ => "null".to_string(),
    }
}
