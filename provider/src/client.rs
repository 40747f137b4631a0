use async_trait::async_trait;
use camel_defs::{FetchError, ResourceDescriptor, ResourceKey};
use kube::api::{Api, ApiResource, DynamicObject};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client as KubeClient, Config};
use log::{debug, info};

use crate::config::ProviderConfig;

/// The single capability the data sources need from a cluster: get one
/// namespaced custom resource.
#[async_trait]
pub trait ObjectGetter: Send + Sync {
    async fn get(
        &self,
        descriptor: &ResourceDescriptor,
        key: &ResourceKey,
    ) -> Result<DynamicObject, FetchError>;
}

pub struct KubeObjectGetter {
    client: KubeClient,
}

impl KubeObjectGetter {
    pub fn new(client: KubeClient) -> Self {
        KubeObjectGetter { client }
    }
}

fn get_api_resource(descriptor: &ResourceDescriptor) -> ApiResource {
    ApiResource {
        api_version: descriptor.api_version(),
        group: descriptor.group.to_string(),
        version: descriptor.version.to_string(),
        kind: descriptor.kind.to_string(),
        plural: descriptor.plural.to_string(),
    }
}

#[async_trait]
impl ObjectGetter for KubeObjectGetter {
    async fn get(
        &self,
        descriptor: &ResourceDescriptor,
        key: &ResourceKey,
    ) -> Result<DynamicObject, FetchError> {
        let api_resource = get_api_resource(descriptor);
        let api: Api<DynamicObject> =
            Api::namespaced_with(self.client.clone(), &key.namespace, &api_resource);

        debug!(
            "GET {}/{} {}/{}",
            descriptor.api_version(),
            descriptor.plural,
            key.namespace,
            key.name
        );
        api.get(&key.name).await.map_err(to_fetch_error)
    }
}

fn to_fetch_error(error: kube::Error) -> FetchError {
    match error {
        kube::Error::Api(response) if response.code == 404 => FetchError::NotFound,
        kube::Error::SerdeError(source) => FetchError::Decode(source),
        error => FetchError::Transport {
            kind: error_kind(&error).to_string(),
            message: error.to_string(),
        },
    }
}

fn error_kind(error: &kube::Error) -> &'static str {
    match error {
        kube::Error::Api(_) => "Api",
        kube::Error::HyperError(_) => "HyperError",
        kube::Error::Service(_) => "Service",
        kube::Error::Auth(_) => "Auth",
        kube::Error::InferConfig(_) => "InferConfig",
        _ => "Other",
    }
}

pub async fn initialize_kube_client(config: &ProviderConfig) -> anyhow::Result<KubeClient> {
    let options = KubeConfigOptions {
        context: config.context.clone(),
        ..Default::default()
    };

    let kube_config = match &config.kubeconfig {
        Some(path) => {
            info!("Using kubeconfig {}", path.display());
            let kubeconfig = Kubeconfig::read_from(path)?;
            Config::from_custom_kubeconfig(kubeconfig, &options).await?
        }
        None if config.context.is_some() => Config::from_kubeconfig(&options).await?,
        None => Config::infer().await?,
    };

    Ok(KubeClient::try_from(kube_config)?)
}
