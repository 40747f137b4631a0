use anyhow::{anyhow, Result};
use camel_defs::{AttributeMode, AttributeType, Attributes};
use serde_json::{Map, Value};

// Converts a wire object into its Terraform shape. Keys become the snake_case
// attribute names and every attribute of the schema is present, null when the
// object does not carry it. Map keys are user data and are left as-is.
pub fn to_terraform_object(value: &Value, attributes: &Attributes) -> Value {
    let source = value.as_object();
    let mut out = Map::new();
    for (name, attribute) in attributes {
        let field = source
            .and_then(|map| map.get(&attribute.wire_name))
            .unwrap_or(&Value::Null);
        out.insert(
            name.clone(),
            to_terraform_value(field, &attribute.attribute_type),
        );
    }
    Value::Object(out)
}

fn to_terraform_value(value: &Value, attribute_type: &AttributeType) -> Value {
    match (attribute_type, value) {
        (_, Value::Null) => Value::Null,
        (AttributeType::Object { attributes }, Value::Object(_)) => {
            to_terraform_object(value, attributes)
        }
        (AttributeType::List { element }, Value::Array(items)) => Value::Array(
            items
                .iter()
                .map(|item| to_terraform_value(item, element))
                .collect(),
        ),
        (AttributeType::Map { element }, Value::Object(map)) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), to_terraform_value(item, element)))
                .collect(),
        ),
        _ => value.clone(),
    }
}

// The reverse of `to_terraform_object`. Null attributes are dropped so they
// decode as absent. Attributes unknown to the schema, computed attributes set
// by the caller and missing required attributes are rejected with their
// dotted path.
pub fn from_terraform_object(value: &Value, attributes: &Attributes) -> Result<Value> {
    from_object(value, attributes, "")
}

fn from_object(value: &Value, attributes: &Attributes, path: &str) -> Result<Value> {
    let map = value
        .as_object()
        .ok_or_else(|| anyhow!("expected an object at {}", display_path(path)))?;

    let mut out = Map::new();
    for (name, field) in map {
        let field_path = join_path(path, name);
        let attribute = attributes
            .get(name)
            .ok_or_else(|| anyhow!("unexpected attribute {}", field_path))?;
        if field.is_null() {
            continue;
        }
        if attribute.mode == AttributeMode::Computed {
            return Err(anyhow!("computed attribute {} cannot be set", field_path));
        }
        out.insert(
            attribute.wire_name.clone(),
            from_value(field, &attribute.attribute_type, &field_path)?,
        );
    }

    for (name, attribute) in attributes {
        if attribute.mode == AttributeMode::Required && !out.contains_key(&attribute.wire_name) {
            return Err(anyhow!(
                "missing required attribute {}",
                join_path(path, name)
            ));
        }
    }

    Ok(Value::Object(out))
}

fn from_value(value: &Value, attribute_type: &AttributeType, path: &str) -> Result<Value> {
    if value.is_null() {
        return Ok(Value::Null);
    }
    match attribute_type {
        AttributeType::Object { attributes } => from_object(value, attributes, path),
        AttributeType::List { element } => {
            let items = value
                .as_array()
                .ok_or_else(|| anyhow!("expected a list at {}", path))?;
            items
                .iter()
                .enumerate()
                .map(|(index, item)| from_value(item, element, &format!("{}[{}]", path, index)))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array)
        }
        AttributeType::Map { element } => {
            let map = value
                .as_object()
                .ok_or_else(|| anyhow!("expected a map at {}", path))?;
            let mut out = Map::new();
            for (key, item) in map {
                out.insert(
                    key.clone(),
                    from_value(item, element, &format!("{}[\"{}\"]", path, key))?,
                );
            }
            Ok(Value::Object(out))
        }
        _ => Ok(value.clone()),
    }
}

fn join_path(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", path, name)
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "the top level"
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camel_defs::Attribute;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn attributes() -> Attributes {
        let mut selector = Attributes::new();
        selector.insert(
            "node_selector".to_string(),
            Attribute::new(
                "nodeSelector",
                AttributeType::Map {
                    element: Box::new(AttributeType::String),
                },
                AttributeMode::Optional,
            ),
        );
        selector.insert(
            "request_cpu".to_string(),
            Attribute::new("requestCPU", AttributeType::String, AttributeMode::Optional),
        );

        let mut attributes = Attributes::new();
        attributes.insert(
            "max_running_builds".to_string(),
            Attribute::new(
                "maxRunningBuilds",
                AttributeType::Int64,
                AttributeMode::Optional,
            ),
        );
        attributes.insert(
            "configuration".to_string(),
            Attribute::new(
                "configuration",
                AttributeType::Object {
                    attributes: selector,
                },
                AttributeMode::Optional,
            ),
        );
        attributes.insert(
            "timeout".to_string(),
            Attribute::new("timeout", AttributeType::String, AttributeMode::Required),
        );
        attributes
    }

    #[test]
    fn test_to_terraform_object_renames_and_fills_nulls() {
        let wire = json!({
            "timeout": "5m",
            "configuration": {
                "requestCPU": "500m",
                "nodeSelector": {"kubernetes.io/os": "linux"}
            },
            "untracked": true
        });

        let expected = json!({
            "timeout": "5m",
            "max_running_builds": null,
            "configuration": {
                "request_cpu": "500m",
                "node_selector": {"kubernetes.io/os": "linux"}
            }
        });

        assert_eq!(to_terraform_object(&wire, &attributes()), expected);
    }

    #[test]
    fn test_from_terraform_object_drops_nulls() {
        let config = json!({
            "timeout": "5m",
            "max_running_builds": null,
            "configuration": {
                "request_cpu": null,
                "node_selector": {"kubernetes.io/os": "linux"}
            }
        });

        let expected = json!({
            "timeout": "5m",
            "configuration": {
                "nodeSelector": {"kubernetes.io/os": "linux"}
            }
        });

        assert_eq!(
            from_terraform_object(&config, &attributes()).unwrap(),
            expected
        );
    }

    #[test]
    fn test_from_terraform_object_rejects_unknown_attribute() {
        let config = json!({
            "timeout": "5m",
            "configuration": {"request_memory": "1Gi"}
        });

        let err = from_terraform_object(&config, &attributes()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unexpected attribute configuration.request_memory"
        );
    }

    #[test]
    fn test_from_terraform_object_rejects_computed_attribute() {
        let mut attributes = attributes();
        attributes.insert(
            "id".to_string(),
            Attribute::new("id", AttributeType::String, AttributeMode::Computed),
        );

        let accepted = from_terraform_object(&json!({"timeout": "5m", "id": null}), &attributes);
        assert_eq!(accepted.unwrap(), json!({"timeout": "5m"}));

        let err = from_terraform_object(&json!({"timeout": "5m", "id": "b1/ns1"}), &attributes)
            .unwrap_err();
        assert_eq!(err.to_string(), "computed attribute id cannot be set");
    }

    #[test]
    fn test_from_terraform_object_requires_required_attributes() {
        let config = json!({"max_running_builds": 2});

        let err = from_terraform_object(&config, &attributes()).unwrap_err();
        assert_eq!(err.to_string(), "missing required attribute timeout");
    }
}
