use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::ObjectReference;
use crate::resource::CamelResource;

pub struct Pipe;

impl CamelResource for Pipe {
    const VERSION: &'static str = "v1";
    const KIND: &'static str = "Pipe";
    const PLURAL: &'static str = "pipes";
    type Spec = PipeSpec;
}

/// The `v1alpha1` predecessor of [`Pipe`], sharing its shape.
pub struct KameletBinding;

impl CamelResource for KameletBinding {
    const VERSION: &'static str = "v1alpha1";
    const KIND: &'static str = "KameletBinding";
    const PLURAL: &'static str = "kameletbindings";
    type Spec = PipeSpec;
}

/// Connects a source to a sink, optionally through a list of steps.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PipeSpec {
    /// Integration is an optional integration used to specify custom parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<serde_json::Value>,
    /// Source is the starting point of the integration defined by this Pipe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Endpoint>,
    /// Sink is the destination of the integration defined by this Pipe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sink: Option<Endpoint>,
    /// Steps contains an optional list of intermediate steps that are executed
    /// between the Source and the Sink.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Endpoint>>,
    /// ErrorHandler is an optional handler called upon an error occurring in the integration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_handler: Option<serde_json::Value>,
    /// Replicas is the number of desired replicas for the Pipe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    /// Custom SA to use for the Pipe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_name: Option<String>,
}

/// One end or intermediate step of a Pipe. Either `ref` or `uri` is set.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// Ref can be used to declare a Kubernetes resource as source/sink endpoint.
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<ObjectReference>,
    /// URI can be used to specify the (Camel) endpoint explicitly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Properties are a key value representation of endpoint properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
    /// DataTypes defines the data type of the data produced/consumed by the endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_types: Option<BTreeMap<String, DataTypeReference>>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DataTypeReference {
    /// The data type component scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    /// The data type format name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}
