use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::SourceSpec;
use crate::resource::CamelResource;

pub struct Kamelet;

impl CamelResource for Kamelet {
    const VERSION: &'static str = "v1";
    const KIND: &'static str = "Kamelet";
    const PLURAL: &'static str = "kamelets";
    type Spec = KameletSpec;
}

/// A reusable route snippet with a typed parameter definition.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct KameletSpec {
    /// The JSON schema of the Kamelet parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<serde_json::Value>,
    /// Sources in any Camel DSL supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<SourceSpec>>,
    /// The main source in YAML DSL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<serde_json::Value>,
    /// Data specification types for the events consumed/produced by the Kamelet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_types: Option<BTreeMap<String, DataTypesSpec>>,
    /// Camel dependencies needed by the Kamelet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
}

/// The data types offered on one slot (in, out or error) of a Kamelet.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DataTypesSpec {
    /// The default data type for this Kamelet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// One to many data type specifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<BTreeMap<String, DataTypeSpec>>,
    /// One to many header specifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, HeaderSpec>>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DataTypeSpec {
    /// The data type component scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    /// The data type format name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Optional data type description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Media type as expected for HTTP media types (ie, application/json).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    /// The list of Camel or Maven dependencies required by the data type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
    /// One to many header specifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, HeaderSpec>>,
    /// The expected schema for the data type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct HeaderSpec {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub header_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}
