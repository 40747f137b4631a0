use std::marker::PhantomData;

use camel_defs::{
    synthetic_id, CamelResource, IdOrder, ManifestDocument, ManifestInput, ManifestState,
    ReadError, Schema,
};
use camel_utils::{manifest_type_name, validate_resource_key};
use log::debug;

use crate::schema::manifest_schema;

/// Static render of one custom resource kind. Never talks to a cluster.
pub struct Manifest<K> {
    _kind: PhantomData<fn() -> K>,
}

impl<K: CamelResource> Manifest<K> {
    pub const ID_ORDER: IdOrder = IdOrder::NamespaceName;

    pub fn new() -> Self {
        Manifest { _kind: PhantomData }
    }

    pub fn type_name() -> String {
        manifest_type_name(K::GROUP, K::KIND, K::VERSION)
    }

    pub fn schema() -> Schema {
        manifest_schema::<K>()
    }

    pub fn render(
        &self,
        input: ManifestInput<K::Spec>,
    ) -> Result<ManifestState<K::Spec>, ReadError> {
        let key = input.metadata.key();
        validate_resource_key(&key)?;

        let identity = K::descriptor().identity();
        let document = ManifestDocument {
            api_version: identity.api_version,
            kind: identity.kind,
            metadata: &input.metadata,
            spec: input.spec.as_ref(),
        };
        let yaml = serde_yaml::to_string(&document).map_err(|e| ReadError::Render(e.to_string()))?;
        let mut yaml = yaml.strip_prefix("---\n").unwrap_or(&yaml).to_string();
        if !yaml.ends_with('\n') {
            yaml.push('\n');
        }
        debug!("Rendered {} manifest {}/{}", K::KIND, key.namespace, key.name);

        Ok(ManifestState {
            id: synthetic_id(&key, Self::ID_ORDER),
            yaml,
            metadata: input.metadata,
            spec: input.spec,
        })
    }
}

impl<K: CamelResource> Default for Manifest<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camel_defs::{Build, BuildSpec, ManifestMetadata};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_without_spec() {
        let state = Manifest::<Build>::new()
            .render(ManifestInput {
                metadata: ManifestMetadata {
                    name: "b1".to_string(),
                    namespace: "ns1".to_string(),
                    labels: None,
                    annotations: None,
                },
                spec: None,
            })
            .unwrap();

        assert_eq!(state.id, "ns1/b1");
        assert_eq!(
            state.yaml,
            "apiVersion: camel.apache.org/v1\nkind: Build\nmetadata:\n  name: b1\n  namespace: ns1\n"
        );
    }

    #[test]
    fn test_render_omits_absent_fields() {
        let state = Manifest::<Build>::new()
            .render(ManifestInput {
                metadata: ManifestMetadata {
                    name: "b1".to_string(),
                    namespace: "ns1".to_string(),
                    labels: None,
                    annotations: None,
                },
                spec: Some(BuildSpec {
                    timeout: Some("5m".to_string()),
                    ..Default::default()
                }),
            })
            .unwrap();

        assert!(state.yaml.ends_with("spec:\n  timeout: 5m\n"));
        assert!(!state.yaml.contains("tasks"));
    }

    #[test]
    fn test_render_rejects_invalid_name() {
        let err = Manifest::<Build>::new()
            .render(ManifestInput {
                metadata: ManifestMetadata {
                    name: "Not_Valid".to_string(),
                    namespace: "ns1".to_string(),
                    labels: None,
                    annotations: None,
                },
                spec: None,
            })
            .unwrap_err();

        assert!(matches!(err, ReadError::InvalidKey { field: "name", .. }));
    }
}
