//! Field-level validators wired in through `#[serde(deserialize_with)]`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// A list that must contain at least one element.
pub fn non_empty_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<String>::deserialize(deserializer)?;
    if values.is_empty() {
        return Err(D::Error::custom("list must contain at least one entry"));
    }
    Ok(values)
}

/// Interpreter versions: non-empty, each a dotted run of digits (`3.10`).
pub fn python_versions<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = non_empty_list(deserializer)?;
    if let Some(bad) = values.iter().find(|v| !is_python_version(v)) {
        return Err(D::Error::custom(format!("invalid python version '{bad}'")));
    }
    Ok(values)
}

pub fn is_python_version(value: &str) -> bool {
    let digits: String = value.chars().filter(|&c| c != '.').collect();
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_version_check() {
        assert!(is_python_version("3.10"));
        assert!(is_python_version("3"));
        assert!(!is_python_version("3.x"));
        assert!(!is_python_version(""));
        assert!(!is_python_version("."));
        assert!(!is_python_version("py3.9"));
    }
}
