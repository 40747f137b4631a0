use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::resource::ResourceKey;

/// Metadata of a data source: the key is supplied by the caller, labels and
/// annotations are copied from the cluster.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq)]
pub struct DataSourceMetadata {
    /// Name of the resource, unique within its namespace.
    pub name: String,
    /// Namespace the resource lives in.
    pub namespace: String,
    /// Map of string keys and values used to organize and categorize objects.
    #[serde(default)]
    pub labels: Option<BTreeMap<String, String>>,
    /// Unstructured key/value map stored with the resource.
    #[serde(default)]
    pub annotations: Option<BTreeMap<String, String>>,
}

impl DataSourceMetadata {
    pub fn key(&self) -> ResourceKey {
        ResourceKey::new(&self.namespace, &self.name)
    }
}

/// Configuration snapshot of a data source. Only the key is read from it.
#[derive(Debug, Deserialize, Clone)]
pub struct DataSourceConfig {
    pub metadata: DataSourceMetadata,
}

/// State produced by a live read.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceState<S> {
    pub id: String,
    pub api_version: String,
    pub kind: String,
    pub metadata: DataSourceMetadata,
    pub spec: Option<S>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ObjectMetadata {
    #[serde(default)]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub annotations: Option<BTreeMap<String, String>>,
}

/// Decode target for objects returned by the cluster. Everything the schema
/// does not track (status, managedFields, ...) is dropped.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectEnvelope<S> {
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub metadata: ObjectMetadata,
    #[serde(default = "Option::default")]
    pub spec: Option<S>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq)]
pub struct ManifestMetadata {
    /// Name of the resource, unique within its namespace.
    pub name: String,
    /// Namespace the resource will be created in.
    pub namespace: String,
    /// Map of string keys and values used to organize and categorize objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    /// Unstructured key/value map stored with the resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
}

impl ManifestMetadata {
    pub fn key(&self) -> ResourceKey {
        ResourceKey::new(&self.namespace, &self.name)
    }
}

/// Caller supplied fields of a manifest.
#[derive(Debug, Deserialize, Clone)]
pub struct ManifestInput<S> {
    pub metadata: ManifestMetadata,
    #[serde(default = "Option::default")]
    pub spec: Option<S>,
}

/// The rendered document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestDocument<'a, S> {
    pub api_version: String,
    pub kind: String,
    pub metadata: &'a ManifestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<&'a S>,
}

/// State produced by a manifest render: the inputs plus `id` and `yaml`.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ManifestState<S> {
    pub id: String,
    pub yaml: String,
    pub metadata: ManifestMetadata,
    pub spec: Option<S>,
}
