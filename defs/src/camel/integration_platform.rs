use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::build::BuildConfiguration;
use super::common::{ConfigurationSpec, MavenSpec, RegistrySpec};
use crate::resource::CamelResource;

pub struct IntegrationPlatform;

impl CamelResource for IntegrationPlatform {
    const VERSION: &'static str = "v1";
    const KIND: &'static str = "IntegrationPlatform";
    const PLURAL: &'static str = "integrationplatforms";
    type Spec = IntegrationPlatformSpec;
}

pub struct IntegrationProfile;

impl CamelResource for IntegrationProfile {
    const VERSION: &'static str = "v1";
    const KIND: &'static str = "IntegrationProfile";
    const PLURAL: &'static str = "integrationprofiles";
    type Spec = IntegrationProfileSpec;
}

/// The cluster wide build and runtime settings used by the operator.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationPlatformSpec {
    /// What kind of cluster you're running (ie, plain Kubernetes or OpenShift).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// The profile you wish to use. It will apply certain traits which are
    /// required by the specific profile chosen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// Specify how to build the Integration/IntegrationKits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<IntegrationPlatformBuildSpec>,
    /// List of traits to be executed by default on all Integrations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traits: Option<serde_json::Value>,
    /// Configuration for Kamelets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kamelet: Option<KameletSettings>,
    /// Deprecated: list of configuration properties to be attached to all the Integrations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Vec<ConfigurationSpec>>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationPlatformBuildSpec {
    /// The Camel K Runtime dependency version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_version: Option<String>,
    /// The runtime used. Likely Camel Quarkus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_provider: Option<String>,
    /// A base image that will be used as base layer for all images built by the operator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_image: Option<String>,
    /// The registry hosting the operator and integration images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry: Option<RegistrySpec>,
    /// The strategy used to publish images: `Jib` or `Spectrum`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_strategy: Option<String>,
    /// Generic options that can used by each publish strategy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_strategy_options: Option<BTreeMap<String, String>>,
    /// How much time to wait before time out the build process.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    /// The timeout used when building the Camel catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_catalog_tool_timeout: Option<String>,
    /// Maven configuration used to build the Camel/Camel-Quarkus applications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maven: Option<MavenSpec>,
    /// The maximum number of parallel running builds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_running_builds: Option<i32>,
    /// The configuration used by the builds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_configuration: Option<BuildConfiguration>,
}

/// Where Kamelets are looked up.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct KameletSettings {
    /// Remote repository used to retrieve Kamelet catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repositories: Option<Vec<KameletRepository>>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct KameletRepository {
    /// The remote repository in the format `github:ORG/REPO/PATH_TO_KAMELETS_FOLDER`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// Settings layered on top of an IntegrationPlatform for selected Integrations.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationProfileSpec {
    /// Specify how to build the Integration/IntegrationKits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<IntegrationProfileBuildSpec>,
    /// List of traits to be executed by default on all Integrations using the profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traits: Option<serde_json::Value>,
    /// Configuration for Kamelets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kamelet: Option<KameletSettings>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationProfileBuildSpec {
    /// The Camel K Runtime dependency version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_version: Option<String>,
    /// The runtime used. Likely Camel Quarkus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_provider: Option<String>,
    /// A base image that will be used as base layer for all images built by the operator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_image: Option<String>,
    /// The registry hosting the operator and integration images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry: Option<RegistrySpec>,
    /// How much time to wait before time out the build process.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    /// Maven configuration used to build the Camel/Camel-Quarkus applications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maven: Option<MavenSpec>,
}
