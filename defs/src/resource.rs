use schemars::JsonSchema;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Static coordinates of a custom resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub group: &'static str,
    pub version: &'static str,
    pub kind: &'static str,
    pub plural: &'static str,
}

impl ResourceDescriptor {
    pub fn api_version(&self) -> String {
        format!("{}/{}", self.group, self.version)
    }

    pub fn identity(&self) -> ResourceIdentity {
        ResourceIdentity {
            api_version: self.api_version(),
            kind: self.kind.to_string(),
        }
    }
}

/// A custom resource kind served by the provider.
///
/// Implementors only carry constants and the shape of their `spec`; reading and
/// rendering are written once against this trait.
pub trait CamelResource: Send + Sync + 'static {
    const GROUP: &'static str = "camel.apache.org";
    const VERSION: &'static str;
    const KIND: &'static str;
    const PLURAL: &'static str;

    type Spec: Serialize + DeserializeOwned + JsonSchema + Clone + Send + Sync + 'static;

    fn descriptor() -> ResourceDescriptor {
        ResourceDescriptor {
            group: Self::GROUP,
            version: Self::VERSION,
            kind: Self::KIND,
            plural: Self::PLURAL,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ResourceKey {
    pub namespace: String,
    pub name: String,
}

impl ResourceKey {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        ResourceKey {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceIdentity {
    pub api_version: String,
    pub kind: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdOrder {
    NameNamespace,
    NamespaceName,
}

pub fn synthetic_id(key: &ResourceKey, order: IdOrder) -> String {
    match order {
        IdOrder::NameNamespace => format!("{}/{}", key.name, key.namespace),
        IdOrder::NamespaceName => format!("{}/{}", key.namespace, key.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_synthetic_id_order() {
        let key = ResourceKey::new("ns1", "b1");
        assert_eq!(synthetic_id(&key, IdOrder::NameNamespace), "b1/ns1");
        assert_eq!(synthetic_id(&key, IdOrder::NamespaceName), "ns1/b1");
    }

    #[test]
    fn test_descriptor_identity() {
        let descriptor = ResourceDescriptor {
            group: "camel.apache.org",
            version: "v1alpha1",
            kind: "KameletBinding",
            plural: "kameletbindings",
        };
        assert_eq!(
            descriptor.identity(),
            ResourceIdentity {
                api_version: "camel.apache.org/v1alpha1".to_string(),
                kind: "KameletBinding".to_string(),
            }
        );
    }
}
