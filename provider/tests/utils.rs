use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use camel_defs::{FetchError, ResourceDescriptor, ResourceKey};
use camel_provider::{CamelProvider, ObjectGetter, ProviderContext};
use kube::api::DynamicObject;
use serde_json::Value;

/// In-memory stand-in for the cluster, keyed by (plural, namespace, name).
#[derive(Default)]
pub struct FakeCluster {
    objects: HashMap<(String, String, String), Value>,
    failure: Option<(String, String)>,
    calls: AtomicUsize,
}

impl FakeCluster {
    pub fn with_object(mut self, plural: &str, namespace: &str, name: &str, object: Value) -> Self {
        self.objects.insert(
            (plural.to_string(), namespace.to_string(), name.to_string()),
            object,
        );
        self
    }

    pub fn failing(mut self, kind: &str, message: &str) -> Self {
        self.failure = Some((kind.to_string(), message.to_string()));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ObjectGetter for FakeCluster {
    async fn get(
        &self,
        descriptor: &ResourceDescriptor,
        key: &ResourceKey,
    ) -> Result<DynamicObject, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some((kind, message)) = &self.failure {
            return Err(FetchError::Transport {
                kind: kind.clone(),
                message: message.clone(),
            });
        }
        let object = self
            .objects
            .get(&(
                descriptor.plural.to_string(),
                key.namespace.clone(),
                key.name.clone(),
            ))
            .ok_or(FetchError::NotFound)?;
        Ok(serde_json::from_value(object.clone()).unwrap())
    }
}

pub fn online_provider(cluster: Arc<FakeCluster>) -> CamelProvider {
    CamelProvider::with_context(Arc::new(ProviderContext::online(cluster)))
}

pub fn offline_provider() -> CamelProvider {
    CamelProvider::with_context(Arc::new(ProviderContext::offline()))
}
