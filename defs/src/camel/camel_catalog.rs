use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::RuntimeSpec;
use crate::resource::CamelResource;

pub struct CamelCatalog;

impl CamelResource for CamelCatalog {
    const VERSION: &'static str = "v1";
    const KIND: &'static str = "CamelCatalog";
    const PLURAL: &'static str = "camelcatalogs";
    type Spec = CamelCatalogSpec;
}

/// The Camel components, languages and loaders known to a runtime version.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CamelCatalogSpec {
    /// The runtime targeted for the catalog.
    #[schemars(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<RuntimeSpec>,
    /// Artifacts required by this catalog.
    #[schemars(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<BTreeMap<String, CamelArtifact>>,
    /// Loaders required by this catalog.
    #[schemars(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaders: Option<BTreeMap<String, CamelLoader>>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CamelArtifactExclusion {
    #[schemars(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[schemars(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CamelArtifactDependency {
    #[schemars(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[schemars(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    /// Transitive dependencies to leave out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<Vec<CamelArtifactExclusion>>,
}

/// Dependencies needed by one side (consumer or producer) of a scheme.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CamelSchemeScope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<CamelArtifactDependency>>,
}

/// A URI scheme offered by a Camel component.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CamelScheme {
    /// The ID (ie, timer in a timer:xyz URI).
    #[schemars(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Is a passive scheme.
    #[schemars(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passive: Option<bool>,
    /// Is an HTTP based scheme.
    #[schemars(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer: Option<CamelSchemeScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer: Option<CamelSchemeScope>,
}

/// A Maven artifact bundling Camel components, languages and data formats.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CamelArtifact {
    #[schemars(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[schemars(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Accepted URI schemes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemes: Option<Vec<CamelScheme>>,
    /// Accepted languages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    /// Accepted data formats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataformats: Option<Vec<String>>,
    /// Required dependencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<CamelArtifactDependency>>,
    /// Provide a list of artifacts to exclude for this dependency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<Vec<CamelArtifactExclusion>>,
    /// The Java types used by the artifact feature (ie, component, data format, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_types: Option<Vec<String>>,
}

/// The loader able to read sources written in a set of languages.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CamelLoader {
    #[schemars(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[schemars(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// A list of DSLs supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    /// A list of additional dependencies required beside the base one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<CamelArtifactDependency>>,
    /// The loader metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}
