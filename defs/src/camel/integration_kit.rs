use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{ConfigurationSpec, SourceSpec};
use crate::resource::CamelResource;

pub struct IntegrationKit;

impl CamelResource for IntegrationKit {
    const VERSION: &'static str = "v1";
    const KIND: &'static str = "IntegrationKit";
    const PLURAL: &'static str = "integrationkits";
    type Spec = IntegrationKitSpec;
}

/// The container image and dependencies an Integration is run with.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationKitSpec {
    /// The container image as identified in the container registry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// A list of Camel dependencies used by this kit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
    /// The profile which is expected by this kit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// Traits that the kit will execute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traits: Option<serde_json::Value>,
    /// Deprecated: use camel trait (.properties) or mount trait instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Vec<ConfigurationSpec>>,
    /// Maven repositories that can be used by the kit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repositories: Option<Vec<String>>,
    /// The sources to add at build time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<SourceSpec>>,
    /// Features offered by the kit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<String>>,
}
