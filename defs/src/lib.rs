mod camel;
mod diagnostic;
mod envelope;
mod errors;
mod resource;
mod schema;

pub use camel::*;
pub use diagnostic::{Diagnostic, Severity};
pub use envelope::{
    DataSourceConfig, DataSourceMetadata, DataSourceState, ManifestDocument, ManifestInput,
    ManifestMetadata, ManifestState, ObjectEnvelope, ObjectMetadata,
};
pub use errors::{FetchError, ReadError};
pub use resource::{
    synthetic_id, CamelResource, IdOrder, ResourceDescriptor, ResourceIdentity, ResourceKey,
};
pub use schema::{Attribute, AttributeMode, AttributeType, Attributes, Schema};
