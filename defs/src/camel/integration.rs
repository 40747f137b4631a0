use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{ConfigurationSpec, ObjectReference, SourceSpec};
use crate::resource::CamelResource;

pub struct Integration;

impl CamelResource for Integration {
    const VERSION: &'static str = "v1";
    const KIND: &'static str = "Integration";
    const PLURAL: &'static str = "integrations";
    type Spec = IntegrationSpec;
}

/// The desired state of an Integration: its sources and how it is deployed.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationSpec {
    /// The number of pods to deploy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    /// The sources which contain the Camel routes to run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<SourceSpec>>,
    /// A source in YAML DSL language which contain the routes to run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flows: Option<Vec<serde_json::Value>>,
    /// The reference of the IntegrationKit which is used for this Integration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_kit: Option<ObjectReference>,
    /// The list of Camel or Maven dependencies required by the Integration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
    /// The profile needed to run this Integration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// The traits needed to run this Integration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traits: Option<serde_json::Value>,
    /// Pod template customization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<serde_json::Value>,
    /// Deprecated: use camel trait (.properties) or mount trait instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Vec<ConfigurationSpec>>,
    /// Additional Maven repositories to be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repositories: Option<Vec<String>>,
    /// Custom SA to use for the Integration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_name: Option<String>,
}
