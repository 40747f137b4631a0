use thiserror::Error;

use crate::diagnostic::Diagnostic;

const REPORT_ISSUE: &str = "Please report this issue to the provider developers.";

/// Failure reported by the object-get capability.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("the requested object does not exist")]
    NotFound,

    #[error("{kind}: {message}")]
    Transport { kind: String, message: String },

    /// The response body was not a decodable object.
    #[error("unable to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("The provider is in offline mode and cannot read resources from the cluster")]
    Offline,

    #[error("Unable to create Kubernetes client: {0}")]
    ClientSetup(String),

    #[error("Invalid {field} \"{value}\": {reason}")]
    InvalidKey {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Unexpected configuration: {0}")]
    UnexpectedConfiguration(String),

    #[error("Resource {namespace}/{name} not found")]
    NotFound { namespace: String, name: String },

    #[error("Unable to GET resource ({kind}): {message}")]
    Transport { kind: String, message: String },

    #[error("Unable to marshal response: {0}")]
    Marshal(#[source] serde_json::Error),

    #[error("Unable to unmarshal response: {0}")]
    Unmarshal(#[source] serde_json::Error),

    #[error("Unable to render manifest: {0}")]
    Render(String),
}

impl ReadError {
    /// Maps a capability failure onto the read taxonomy for the given key.
    pub fn from_fetch(error: FetchError, namespace: &str, name: &str) -> Self {
        match error {
            FetchError::NotFound => ReadError::NotFound {
                namespace: namespace.to_string(),
                name: name.to_string(),
            },
            FetchError::Transport { kind, message } => ReadError::Transport { kind, message },
            FetchError::Decode(source) => ReadError::Unmarshal(source),
        }
    }

    /// Internal errors are defects of the tool, never something the user can fix.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            ReadError::Marshal(_) | ReadError::Unmarshal(_) | ReadError::Render(_)
        )
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ReadError::Offline => Diagnostic::error(
                "Provider in Offline Mode",
                "This provider is in offline mode and therefore cannot read resources from a cluster. \
                 Disable offline mode or use the manifest variant of this data source.",
            ),
            ReadError::ClientSetup(message) => Diagnostic::error(
                "Unable to Create Kubernetes Client",
                format!(
                    "Check the kubeconfig and context settings of the provider.\n\nError: {}",
                    message
                ),
            ),
            ReadError::InvalidKey { .. } => {
                Diagnostic::error("Invalid Resource Identifier", self.to_string())
            }
            ReadError::UnexpectedConfiguration(message) => Diagnostic::error(
                "Unexpected Configuration",
                format!(
                    "The configuration does not match the schema of this data source: {}",
                    message
                ),
            ),
            ReadError::NotFound { namespace, name } => Diagnostic::error(
                "Unable to find resource",
                format!(
                    "The requested resource cannot be found. Make sure it exists in the cluster.\n\nNamespace: {}\nName: {}",
                    namespace, name
                ),
            ),
            ReadError::Transport { kind, message } => Diagnostic::error(
                "Unable to GET resource",
                format!(
                    "An unexpected error occurred while reading the resource.\n\nError type: {}\nError message: {}",
                    kind, message
                ),
            ),
            ReadError::Marshal(_) | ReadError::Unmarshal(_) | ReadError::Render(_) => {
                Diagnostic::error(
                    "Internal Provider Error",
                    format!("{}. {}", self, REPORT_ISSUE),
                )
            }
        }
    }
}
