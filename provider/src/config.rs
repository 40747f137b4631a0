use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Settings of the provider block.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, Default, PartialEq)]
pub struct ProviderConfig {
    /// Whether the provider is running in offline mode. Offline providers
    /// can only render manifests; live reads are refused.
    #[serde(default)]
    pub offline: bool,
    /// Path to the kubeconfig file. The regular kubeconfig lookup (in-cluster
    /// config, `KUBECONFIG`, `~/.kube/config`) is used when unset.
    #[serde(default)]
    pub kubeconfig: Option<PathBuf>,
    /// The kubeconfig context to use.
    #[serde(default)]
    pub context: Option<String>,
}
