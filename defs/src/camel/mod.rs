mod build;
mod camel_catalog;
mod common;
mod integration;
mod integration_kit;
mod integration_platform;
mod kamelet;
mod pipe;

pub use build::{
    Build, BuildConfiguration, BuildSpec, BuilderTask, PublishTask, S2iTask, Task, UserTask,
};
pub use camel_catalog::{
    CamelArtifact, CamelArtifactDependency, CamelArtifactExclusion, CamelCatalog,
    CamelCatalogSpec, CamelLoader, CamelScheme, CamelSchemeScope,
};
pub use common::{
    Capability, CamelProperty, ConfigurationSpec, KeySelector, MavenArtifact, MavenBuildSpec,
    MavenRepository, MavenServer, MavenSpec, ObjectReference, RegistrySpec, RepositoryPolicy,
    RuntimeSpec, SourceSpec, ValueSource,
};
pub use integration::{Integration, IntegrationSpec};
pub use integration_kit::{IntegrationKit, IntegrationKitSpec};
pub use integration_platform::{
    IntegrationPlatform, IntegrationPlatformBuildSpec, IntegrationPlatformSpec,
    IntegrationProfile, IntegrationProfileBuildSpec, IntegrationProfileSpec, KameletRepository,
    KameletSettings,
};
pub use kamelet::{DataTypeSpec, DataTypesSpec, HeaderSpec, Kamelet, KameletSpec};
pub use pipe::{DataTypeReference, Endpoint, KameletBinding, Pipe, PipeSpec};
