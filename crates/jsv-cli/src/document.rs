//! # Option Value Loading
//!
//! Reads option values from disk the way a host would hand them to the
//! adapter. YAML files (`.yaml`/`.yml`) are parsed and converted into a
//! JSON value tree here. Every other file is handed over verbatim as a JSON
//! string, so malformed JSON is reported by the adapter as invalid input.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde_json::{Map, Value};

/// Load one option value from `path`.
pub fn load_option_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;

    if is_yaml(path) {
        let yaml: serde_yaml::Value = serde_yaml::from_str(&content)
            .with_context(|| format!("invalid YAML in {}", path.display()))?;
        yaml_to_json(yaml).with_context(|| format!("cannot convert YAML in {}", path.display()))
    } else {
        Ok(Value::String(content))
    }
}

/// Load a host variables mapping from a YAML or JSON file.
pub fn load_host_vars(path: &Path) -> Result<Map<String, Value>> {
    let value = match load_option_value(path)? {
        Value::String(text) => serde_json::from_str(&text)
            .with_context(|| format!("invalid JSON in {}", path.display()))?,
        other => other,
    };
    match value {
        Value::Object(map) => Ok(map),
        other => Err(anyhow!(
            "host variables in {} must be a mapping, found {}",
            path.display(),
            jsv_core::input::json_type_name(&other)
        )),
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    )
}

/// Convert a YAML tree into a JSON tree.
///
/// Tags are dropped. Numeric and boolean map keys are stringified; any other
/// non-string key is rejected. Scalars go through `serde_json::to_value`.
fn yaml_to_json(yaml: serde_yaml::Value) -> Result<Value> {
    Ok(match yaml {
        serde_yaml::Value::Mapping(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| -> Result<(String, Value)> {
                    Ok((yaml_key(key)?, yaml_to_json(value)?))
                })
                .collect::<Result<Map<String, Value>>>()?,
        ),
        serde_yaml::Value::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<Vec<_>>>()?,
        ),
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value)?,
        scalar => serde_json::to_value(scalar)?,
    })
}

fn yaml_key(key: serde_yaml::Value) -> Result<String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        other => bail!("unsupported YAML mapping key: {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_yaml_file_becomes_json_tree() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "data.yaml",
            "name: web01\nports:\n  - 80\n  - 443\n1: numeric-key\nenabled: true\n",
        );
        let value = load_option_value(&path).unwrap();
        assert_eq!(value["name"], "web01");
        assert_eq!(value["ports"], json!([80, 443]));
        assert_eq!(value["1"], "numeric-key");
        assert_eq!(value["enabled"], true);
    }

    #[test]
    fn test_yaml_tags_dropped_and_complex_keys_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let tagged = write_file(&dir, "tagged.yaml", "port: !custom 8080\nratio: 0.5\n");
        let value = load_option_value(&tagged).unwrap();
        assert_eq!(value, json!({"port": 8080, "ratio": 0.5}));

        let complex = write_file(&dir, "complex.yaml", "? [a, b]\n: 1\n");
        let err = load_option_value(&complex).unwrap_err();
        assert!(format!("{err:#}").contains("unsupported YAML mapping key"), "{err:#}");
    }

    #[test]
    fn test_json_file_passed_as_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "data.json", r#"{"a": 1}"#);
        assert_eq!(load_option_value(&path).unwrap(), json!(r#"{"a": 1}"#));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_option_value(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }

    #[test]
    fn test_host_vars_from_json_and_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = write_file(&dir, "vars.json", r#"{"ansible_validate_jsonschema_draft": "draft4"}"#);
        let yaml_path = write_file(&dir, "vars.yml", "ansible_validate_jsonschema_draft: draft6\n");
        assert_eq!(
            load_host_vars(&json_path).unwrap()["ansible_validate_jsonschema_draft"],
            "draft4"
        );
        assert_eq!(
            load_host_vars(&yaml_path).unwrap()["ansible_validate_jsonschema_draft"],
            "draft6"
        );
    }

    #[test]
    fn test_host_vars_must_be_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "vars.yaml", "- draft4\n");
        let err = load_host_vars(&path).unwrap_err();
        assert!(err.to_string().contains("must be a mapping"), "{err}");
    }
}
