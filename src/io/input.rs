use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::catalog::{BiomarkerKey, UserVector};

/// Read a user-supplied biomarker map from a JSON file: an object mapping
/// biomarker keys to non-negative numbers. Absent keys mean "not measured".
pub fn read_user_vector(path: &Path) -> Result<UserVector> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read biomarker input {}", path.display()))?;
    parse_user_vector(&content, &path.display().to_string())
}

/// Strict parse of the input contract. Unknown keys, non-numeric values,
/// negative values, and non-finite values are all rejected up front so the
/// derivation pipeline only ever sees well-typed input.
pub fn parse_user_vector(content: &str, source: &str) -> Result<UserVector> {
    let value: serde_json::Value = serde_json::from_str(content)
        .with_context(|| format!("{} is not valid JSON", source))?;
    let map = match value.as_object() {
        Some(map) => map,
        None => bail!("{} must be a JSON object of biomarker values", source),
    };

    let mut user = UserVector::empty();
    for (raw_key, raw_value) in map {
        let key = BiomarkerKey::parse(raw_key)
            .ok_or_else(|| anyhow::anyhow!("{}: unknown biomarker key '{}'", source, raw_key))?;
        let number = raw_value
            .as_f64()
            .ok_or_else(|| anyhow::anyhow!("{}: '{}' is not a number", source, raw_key))?;
        if !number.is_finite() {
            bail!("{}: '{}' is not finite", source, raw_key);
        }
        if number < 0.0 {
            bail!("{}: '{}' must be non-negative (got {})", source, raw_key, number);
        }
        user.set(key, number);
    }

    Ok(user)
}
