use std::marker::PhantomData;
use std::sync::Arc;

use camel_defs::{
    synthetic_id, CamelResource, DataSourceMetadata, DataSourceState, IdOrder, ObjectEnvelope,
    ReadError, ResourceKey, Schema,
};
use camel_utils::{data_source_type_name, validate_resource_key};
use log::{debug, info};

use crate::context::ProviderContext;
use crate::schema::data_source_schema;

/// Live read of one custom resource kind.
pub struct DataSource<K> {
    context: Arc<ProviderContext>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: CamelResource> DataSource<K> {
    pub const ID_ORDER: IdOrder = IdOrder::NameNamespace;

    pub fn new(context: Arc<ProviderContext>) -> Self {
        DataSource {
            context,
            _kind: PhantomData,
        }
    }

    pub fn type_name() -> String {
        data_source_type_name(K::GROUP, K::KIND, K::VERSION)
    }

    pub fn schema() -> Schema {
        data_source_schema::<K>()
    }

    /// Fetches the object and projects it onto the typed envelope.
    ///
    /// Identity comes from the kind's constants and the id from the caller's
    /// key, never from the server response. Any failure yields no state.
    pub async fn read(&self, key: &ResourceKey) -> Result<DataSourceState<K::Spec>, ReadError> {
        let getter = self.context.getter()?;
        validate_resource_key(key)?;

        let descriptor = K::descriptor();
        info!(
            "Reading {} {}/{}",
            descriptor.kind, key.namespace, key.name
        );

        let object = getter
            .get(&descriptor, key)
            .await
            .map_err(|e| ReadError::from_fetch(e, &key.namespace, &key.name))?;

        let raw = serde_json::to_value(&object).map_err(ReadError::Marshal)?;
        let envelope: ObjectEnvelope<K::Spec> =
            serde_json::from_value(raw).map_err(ReadError::Unmarshal)?;

        if envelope.kind.as_deref() != Some(descriptor.kind)
            || envelope.api_version != Some(descriptor.api_version())
        {
            debug!(
                "Server reported {:?}/{:?} for {}, keeping {}",
                envelope.api_version,
                envelope.kind,
                key.name,
                descriptor.kind
            );
        }

        let identity = descriptor.identity();
        Ok(DataSourceState {
            id: synthetic_id(key, Self::ID_ORDER),
            api_version: identity.api_version,
            kind: identity.kind,
            metadata: DataSourceMetadata {
                name: key.name.clone(),
                namespace: key.namespace.clone(),
                labels: envelope.metadata.labels,
                annotations: envelope.metadata.annotations,
            },
            spec: envelope.spec,
        })
    }
}
