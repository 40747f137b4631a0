use std::sync::Arc;

use async_trait::async_trait;
use camel_defs::{
    Build, CamelCatalog, CamelResource, DataSourceConfig, Diagnostic, Integration,
    IntegrationKit, IntegrationPlatform, IntegrationProfile, Kamelet, KameletBinding,
    ManifestInput, Pipe, ReadError, ResourceDescriptor, Schema,
};
use camel_utils::{from_terraform_object, to_terraform_object};
use log::{error, warn};
use serde::Serialize;
use serde_json::Value;

use crate::context::ProviderContext;
use crate::data_source::DataSource;
use crate::manifest::Manifest;

/// Outcome of one read: state on success, diagnostics always.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ReadResponse {
    pub state: Option<Value>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ReadResponse {
    pub fn ok(state: Value) -> Self {
        ReadResponse {
            state: Some(state),
            diagnostics: vec![],
        }
    }

    pub fn error(diagnostic: Diagnostic) -> Self {
        ReadResponse {
            state: None,
            diagnostics: vec![diagnostic],
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

impl From<ReadError> for ReadResponse {
    fn from(error: ReadError) -> Self {
        if error.is_internal() {
            error!("{}", error);
        } else {
            warn!("{}", error);
        }
        ReadResponse::error(error.to_diagnostic())
    }
}

/// Type-erased entry of the registry, one per data source type name.
#[async_trait]
pub trait DataSourceHandler: Send + Sync {
    fn type_name(&self) -> String;
    fn descriptor(&self) -> ResourceDescriptor;
    fn schema(&self) -> &Schema;
    /// `config` is the Terraform-shaped configuration snapshot.
    async fn read(&self, config: &Value) -> ReadResponse;
}

struct LiveDataSource<K: CamelResource> {
    inner: DataSource<K>,
    schema: Schema,
}

impl<K: CamelResource> LiveDataSource<K> {
    async fn try_read(&self, config: &Value) -> Result<Value, ReadError> {
        let wire = from_terraform_object(config, &self.schema.attributes)
            .map_err(|e| ReadError::UnexpectedConfiguration(e.to_string()))?;
        let config: DataSourceConfig = serde_json::from_value(wire)
            .map_err(|e| ReadError::UnexpectedConfiguration(e.to_string()))?;

        let state = self.inner.read(&config.metadata.key()).await?;
        let wire = serde_json::to_value(&state).map_err(ReadError::Marshal)?;
        Ok(to_terraform_object(&wire, &self.schema.attributes))
    }
}

#[async_trait]
impl<K: CamelResource> DataSourceHandler for LiveDataSource<K> {
    fn type_name(&self) -> String {
        DataSource::<K>::type_name()
    }

    fn descriptor(&self) -> ResourceDescriptor {
        K::descriptor()
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    async fn read(&self, config: &Value) -> ReadResponse {
        match self.try_read(config).await {
            Ok(state) => ReadResponse::ok(state),
            Err(e) => e.into(),
        }
    }
}

struct RenderedManifest<K: CamelResource> {
    inner: Manifest<K>,
    schema: Schema,
}

impl<K: CamelResource> RenderedManifest<K> {
    fn try_read(&self, config: &Value) -> Result<Value, ReadError> {
        let wire = from_terraform_object(config, &self.schema.attributes)
            .map_err(|e| ReadError::UnexpectedConfiguration(e.to_string()))?;
        let input: ManifestInput<K::Spec> = serde_json::from_value(wire)
            .map_err(|e| ReadError::UnexpectedConfiguration(e.to_string()))?;

        let state = self.inner.render(input)?;
        let wire = serde_json::to_value(&state).map_err(ReadError::Marshal)?;
        Ok(to_terraform_object(&wire, &self.schema.attributes))
    }
}

#[async_trait]
impl<K: CamelResource> DataSourceHandler for RenderedManifest<K> {
    fn type_name(&self) -> String {
        Manifest::<K>::type_name()
    }

    fn descriptor(&self) -> ResourceDescriptor {
        K::descriptor()
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    async fn read(&self, config: &Value) -> ReadResponse {
        match self.try_read(config) {
            Ok(state) => ReadResponse::ok(state),
            Err(e) => e.into(),
        }
    }
}

fn register<K: CamelResource>(
    handlers: &mut Vec<Box<dyn DataSourceHandler>>,
    context: &Arc<ProviderContext>,
) {
    handlers.push(Box::new(LiveDataSource::<K> {
        inner: DataSource::new(context.clone()),
        schema: DataSource::<K>::schema(),
    }));
    handlers.push(Box::new(RenderedManifest::<K> {
        inner: Manifest::new(),
        schema: Manifest::<K>::schema(),
    }));
}

/// A live data source and a manifest for every supported kind.
pub fn data_sources(context: &Arc<ProviderContext>) -> Vec<Box<dyn DataSourceHandler>> {
    let mut handlers = Vec::new();
    register::<Build>(&mut handlers, context);
    register::<CamelCatalog>(&mut handlers, context);
    register::<Integration>(&mut handlers, context);
    register::<IntegrationKit>(&mut handlers, context);
    register::<IntegrationPlatform>(&mut handlers, context);
    register::<IntegrationProfile>(&mut handlers, context);
    register::<Kamelet>(&mut handlers, context);
    register::<Pipe>(&mut handlers, context);
    register::<KameletBinding>(&mut handlers, context);
    handlers
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn offline_handlers() -> Vec<Box<dyn DataSourceHandler>> {
        data_sources(&Arc::new(ProviderContext::offline()))
    }

    #[test]
    fn test_every_kind_has_both_variants() {
        let names: Vec<String> = offline_handlers().iter().map(|h| h.type_name()).collect();
        assert_eq!(names.len(), 18);
        assert!(names.contains(&"k8s_camel_apache_org_build_v1".to_string()));
        assert!(names.contains(&"k8s_camel_apache_org_build_v1_manifest".to_string()));
        assert!(names.contains(&"k8s_camel_apache_org_kamelet_binding_v1alpha1".to_string()));
        assert!(names.contains(&"k8s_camel_apache_org_integration_platform_v1_manifest".to_string()));
    }

    #[tokio::test]
    async fn test_unexpected_attribute_is_reported() {
        let handlers = offline_handlers();
        let manifest = handlers
            .iter()
            .find(|h| h.type_name() == "k8s_camel_apache_org_kamelet_v1_manifest")
            .unwrap();

        let response = manifest
            .read(&json!({
                "metadata": {"name": "k1", "namespace": "ns1"},
                "status": {}
            }))
            .await;

        assert!(response.state.is_none());
        assert_eq!(response.diagnostics[0].summary, "Unexpected Configuration");
        assert!(response.diagnostics[0].detail.contains("status"));
    }

    #[tokio::test]
    async fn test_manifest_state_uses_terraform_names() {
        let handlers = offline_handlers();
        let manifest = handlers
            .iter()
            .find(|h| h.type_name() == "k8s_camel_apache_org_build_v1_manifest")
            .unwrap();

        let response = manifest
            .read(&json!({
                "id": null,
                "yaml": null,
                "metadata": {"name": "b1", "namespace": "ns1", "labels": null, "annotations": null},
                "spec": {"max_running_builds": 2}
            }))
            .await;

        assert!(!response.has_errors());
        let state = response.state.unwrap();
        assert_eq!(state["id"], json!("ns1/b1"));
        assert_eq!(state["spec"]["max_running_builds"], json!(2));
        assert_eq!(state["spec"]["timeout"], json!(null));
        assert!(state["yaml"]
            .as_str()
            .unwrap()
            .contains("maxRunningBuilds: 2"));
    }
}
