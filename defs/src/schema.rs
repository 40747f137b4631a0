use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AttributeMode {
    Required,
    Optional,
    Computed,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AttributeType {
    String,
    Int64,
    Float64,
    Bool,
    /// Free-form JSON, passed through untouched.
    Dynamic,
    List { element: Box<AttributeType> },
    Map { element: Box<AttributeType> },
    Object { attributes: Attributes },
}

/// Nested attributes keyed by their Terraform (snake_case) name.
pub type Attributes = BTreeMap<String, Attribute>;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Attribute {
    /// Field name on the wire (Kubernetes JSON, usually camelCase).
    pub wire_name: String,
    #[serde(flatten)]
    pub attribute_type: AttributeType,
    pub mode: AttributeMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Attribute {
    pub fn new(wire_name: &str, attribute_type: AttributeType, mode: AttributeMode) -> Self {
        Attribute {
            wire_name: wire_name.to_string(),
            attribute_type,
            mode,
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// Top level schema of a data source as advertised to the orchestrator.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Schema {
    pub description: String,
    pub attributes: Attributes,
}

impl Schema {
    /// Looks up an attribute by a dotted path of Terraform names, e.g. `metadata.name`.
    pub fn attribute(&self, path: &str) -> Option<&Attribute> {
        let mut parts = path.split('.');
        let mut current = self.attributes.get(parts.next()?)?;
        for part in parts {
            current = match &current.attribute_type {
                AttributeType::Object { attributes } => attributes.get(part)?,
                AttributeType::List { element } | AttributeType::Map { element } => {
                    match element.as_ref() {
                        AttributeType::Object { attributes } => attributes.get(part)?,
                        _ => return None,
                    }
                }
                _ => return None,
            };
        }
        Some(current)
    }
}
