use std::sync::Arc;

use camel_defs::ReadError;
use log::info;

use crate::client::{initialize_kube_client, KubeObjectGetter, ObjectGetter};
use crate::config::ProviderConfig;

/// Everything a data source needs from the configured provider. Built once
/// and shared read-only between all reads.
pub enum ProviderContext {
    Offline,
    Online(Arc<dyn ObjectGetter>),
}

impl ProviderContext {
    pub fn offline() -> Self {
        ProviderContext::Offline
    }

    pub fn online(getter: Arc<dyn ObjectGetter>) -> Self {
        ProviderContext::Online(getter)
    }

    /// Offline providers never build a client.
    pub async fn from_config(config: &ProviderConfig) -> Result<Self, ReadError> {
        if config.offline {
            info!("Provider configured in offline mode");
            return Ok(ProviderContext::offline());
        }

        let client = initialize_kube_client(config)
            .await
            .map_err(|e| ReadError::ClientSetup(format!("{:#}", e)))?;
        Ok(ProviderContext::online(Arc::new(KubeObjectGetter::new(client))))
    }

    pub fn is_offline(&self) -> bool {
        matches!(self, ProviderContext::Offline)
    }

    pub fn getter(&self) -> Result<&dyn ObjectGetter, ReadError> {
        match self {
            ProviderContext::Offline => Err(ReadError::Offline),
            ProviderContext::Online(getter) => Ok(getter.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_config_builds_no_client() {
        let config = ProviderConfig {
            offline: true,
            kubeconfig: Some("/nonexistent/kubeconfig".into()),
            context: None,
        };
        let context = ProviderContext::from_config(&config).await.unwrap();

        assert!(context.is_offline());
        assert!(matches!(context.getter(), Err(ReadError::Offline)));
    }
}
