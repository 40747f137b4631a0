use std::path::Path;

use anyhow::{Context, Result};
use camel_provider::ReadResponse;
use serde_json::{json, Value};

/// Configuration snapshot of a live read: only the key is set.
pub fn read_config(namespace: &str, name: &str) -> Value {
    json!({
        "metadata": {
            "name": name,
            "namespace": namespace,
        }
    })
}

/// Reads a configuration snapshot. YAML is a superset of JSON so both parse.
pub fn load_snapshot(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_snapshot(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn parse_snapshot(content: &str) -> Result<Value> {
    let value: Value = serde_yaml::from_str(content)?;
    if !value.is_object() {
        anyhow::bail!("expected a mapping at the top level");
    }
    Ok(value)
}

/// Prints diagnostics on stderr and the state on stdout. Returns whether the
/// response carried an error.
pub fn print_response(response: &ReadResponse, yaml_only: bool) -> Result<bool> {
    for diagnostic in &response.diagnostics {
        eprintln!(
            "{:?}: {}\n\n{}\n",
            diagnostic.severity, diagnostic.summary, diagnostic.detail
        );
    }

    if let Some(state) = &response.state {
        match (yaml_only, state.get("yaml").and_then(Value::as_str)) {
            (true, Some(yaml)) => print!("{}", yaml),
            _ => println!("{}", serde_json::to_string_pretty(state)?),
        }
    }
    Ok(response.has_errors())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_config() {
        assert_eq!(
            read_config("ns1", "b1"),
            json!({"metadata": {"name": "b1", "namespace": "ns1"}})
        );
    }

    #[test]
    fn test_parse_yaml_snapshot() {
        let value = parse_snapshot(
            r#"
metadata:
  name: b1
  namespace: ns1
spec:
  timeout: 5m
"#,
        )
        .unwrap();
        assert_eq!(value["spec"]["timeout"], json!("5m"));
    }

    #[test]
    fn test_parse_json_snapshot() {
        let value = parse_snapshot(r#"{"metadata": {"name": "b1", "namespace": "ns1"}}"#).unwrap();
        assert_eq!(value["metadata"]["name"], json!("b1"));
    }

    #[test]
    fn test_parse_rejects_scalar() {
        assert!(parse_snapshot("just a string").is_err());
    }
}
