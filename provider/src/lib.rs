mod client;
mod config;
mod context;
mod data_source;
mod manifest;
mod provider;
mod registry;
mod schema;

pub use client::{initialize_kube_client, KubeObjectGetter, ObjectGetter};
pub use config::ProviderConfig;
pub use context::ProviderContext;
pub use data_source::DataSource;
pub use manifest::Manifest;
pub use provider::CamelProvider;
pub use registry::{data_sources, DataSourceHandler, ReadResponse};
pub use schema::{data_source_schema, manifest_schema, provider_schema};
