use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{MavenBuildSpec, RegistrySpec, RuntimeSpec, SourceSpec};
use crate::resource::CamelResource;

pub struct Build;

impl CamelResource for Build {
    const VERSION: &'static str = "v1";
    const KIND: &'static str = "Build";
    const PLURAL: &'static str = "builds";
    type Spec = BuildSpec;
}

/// The desired configuration of a Build: the tasks to run in order.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BuildSpec {
    /// Tasks that are executed by the build, in order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
    /// Timeout defines the Build maximum execution duration, e.g. `5m`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    /// The configuration that should be used to perform the Build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<BuildConfiguration>,
    /// The namespace where to run the builder Pod.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_namespace: Option<String>,
    /// Deprecated: use the configuration of the integration platform instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_running_builds: Option<i32>,
}

/// How and where a build or a single task is executed.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
    /// The container image to be used to run the build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_image: Option<String>,
    /// The namespace where to run the builder Pod.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_namespace: Option<String>,
    /// The Build execution strategy: `routine` or `pod`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    /// The order strategy to use for the build: `dependencies`, `fifo` or `sequential`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_strategy: Option<String>,
    /// The minimum amount of CPU required. Only used for `pod` strategy.
    #[serde(rename = "requestCPU", skip_serializing_if = "Option::is_none")]
    pub request_cpu: Option<String>,
    /// The minimum amount of memory required. Only used for `pod` strategy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_memory: Option<String>,
    /// The maximum amount of CPU required. Only used for `pod` strategy.
    #[serde(rename = "limitCPU", skip_serializing_if = "Option::is_none")]
    pub limit_cpu: Option<String>,
    /// The maximum amount of memory required. Only used for `pod` strategy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_memory: Option<String>,
    /// The node selector for the builder Pod.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_selector: Option<BTreeMap<String, String>>,
    /// Annotations for the builder Pod.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
    /// The list of platforms used in order to build a container image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,
}

/// A single step of a Build. Exactly one field is expected to be set.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Generates the project used to package the integration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builder: Option<BuilderTask>,
    /// Packages the integration once the project is generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<BuilderTask>,
    /// A user defined task run in a container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<UserTask>,
    /// Builds and publishes the image with Jib.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jib: Option<PublishTask>,
    /// Builds and publishes the image with Spectrum.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spectrum: Option<PublishTask>,
    /// Deprecated: builds and publishes the image with Buildah.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buildah: Option<PublishTask>,
    /// Deprecated: builds and publishes the image with Kaniko.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kaniko: Option<PublishTask>,
    /// Builds the image with an OpenShift source-to-image build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s2i: Option<S2iTask>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BuilderTask {
    /// Name of the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The configuration that should be used to perform the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<BuildConfiguration>,
    /// The base image layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_image: Option<String>,
    /// The runtime to use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<RuntimeSpec>,
    /// The sources of the integration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<SourceSpec>>,
    /// The list of dependencies to use for this build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
    /// The list of steps to execute (see pkg/builder/).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
    /// The Maven configuration used by the build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maven: Option<MavenBuildSpec>,
    /// The directory where to build the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_dir: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PublishTask {
    /// Name of the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The configuration that should be used to perform the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<BuildConfiguration>,
    /// Can be useful to share info with other tasks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_dir: Option<String>,
    /// Base image layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_image: Option<String>,
    /// Final image name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Where to publish the final image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry: Option<RegistrySpec>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct S2iTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<BuildConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_dir: Option<String>,
    /// Used by the ImageStream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<BuildConfiguration>,
    /// The container image to use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_image: Option<String>,
    /// The command to execute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<String>>,
    /// The desired image build name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publishing_image: Option<String>,
    /// The user ID the container runs as.
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}
