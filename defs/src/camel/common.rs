use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Reference to another object in the cluster.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ObjectReference {
    /// API version of the referent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Kind of the referent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Name of the referent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Namespace of the referent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// UID of the referent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_version: Option<String>,
    /// Path to a piece of the referenced object, if only part of it is meant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_path: Option<String>,
}

/// Selects a key of a ConfigMap or Secret.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct KeySelector {
    /// The key to select.
    #[schemars(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Name of the referent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Specify whether the referent or its key must be defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}

/// A value taken from either a ConfigMap or a Secret.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ValueSource {
    /// Selects a key of a ConfigMap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_map_key_ref: Option<KeySelector>,
    /// Selects a key of a Secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key_ref: Option<KeySelector>,
}

/// Deprecated configuration entry kept for backward compatibility.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationSpec {
    /// Represents the type of configuration, ie: property, configmap, secret, ...
    #[schemars(required)]
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub config_type: Option<String>,
    /// The value of the configuration (ie, a property, a configmap name, ...).
    #[schemars(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A Maven artifact coordinate.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MavenArtifact {
    #[schemars(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[schemars(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Maven type of the artifact, `jar` when unset.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Frequency for downloading updates: always, daily, interval:X or never.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_policy: Option<String>,
    /// What to do when verification of an artifact fails: ignore, fail or warn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum_policy: Option<String>,
}

/// A Maven repository.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MavenRepository {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub releases: Option<RepositoryPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshots: Option<RepositoryPolicy>,
}

/// Credentials and settings for a Maven server.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MavenServer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<BTreeMap<String, String>>,
}

/// Maven settings used while building integrations.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MavenSpec {
    /// The path of the local Maven repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_repository: Option<String>,
    /// The Maven properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, String>>,
    /// A reference to the ConfigMap or Secret key that contains the Maven settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<ValueSource>,
    /// A reference to the ConfigMap or Secret key that contains the security of the Maven settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings_security: Option<ValueSource>,
    /// The Secrets name and key, containing the CA certificate(s) used to connect
    /// to remote Maven repositories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_secrets: Option<Vec<KeySelector>>,
    /// The Maven build extensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<MavenArtifact>>,
    /// The CLI options that are appended to the list of arguments for Maven commands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cli_options: Option<Vec<String>>,
    /// Additional Maven profiles, as ConfigMap or Secret references.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiles: Option<Vec<ValueSource>>,
}

/// Maven settings of a single build, including repositories and servers.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MavenBuildSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<ValueSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings_security: Option<ValueSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_secrets: Option<Vec<KeySelector>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<MavenArtifact>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cli_options: Option<Vec<String>>,
    /// Additional repositories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repositories: Option<Vec<MavenRepository>>,
    /// Servers (auth).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<MavenServer>>,
}

/// Container registry used to push built images.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySpec {
    /// If the container registry is insecure (ie, http only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insecure: Option<bool>,
    /// The URI to access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// The secret where credentials are stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// The ConfigMap containing the certificate authority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca: Option<String>,
    /// The registry organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

/// A source of an integration, kit or kamelet.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SourceSpec {
    /// The name of the source, usually the file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The source code (plain text).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// The confimap reference holding the source content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_ref: Option<String>,
    /// The confimap key holding the source content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_key: Option<String>,
    /// The internal content type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// True if the content is compressed (base64 encoded).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression: Option<bool>,
    /// The language in use, ie: yaml, java, xml.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// The loader that should be used to load the source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loader: Option<String>,
    /// Interceptors run on the source before it is loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interceptors: Option<Vec<String>>,
    /// Type defines the kind of source described by this object.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    /// List of property names defined in the source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_names: Option<Vec<String>>,
}

/// A property with its value.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CamelProperty {
    #[schemars(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A set of dependencies and properties enabling a runtime feature.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Capability {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<MavenArtifact>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_properties: Option<Vec<CamelProperty>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_time_properties: Option<Vec<CamelProperty>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

/// The runtime used by integrations.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeSpec {
    /// Camel K Runtime version.
    #[schemars(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Camel main application provider, ie, Camel Quarkus.
    #[schemars(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Application entry point (main) to be executed.
    #[schemars(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_class: Option<String>,
    /// Maven specification used by the runtime.
    #[schemars(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<MavenArtifact>>,
    /// Features offered by the runtime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<BTreeMap<String, Capability>>,
    /// Set of metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}
