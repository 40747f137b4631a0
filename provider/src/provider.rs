use std::collections::BTreeMap;
use std::sync::Arc;

use camel_defs::{Diagnostic, ReadError, Schema};
use camel_utils::from_terraform_object;
use log::{debug, info};
use serde_json::Value;

use crate::config::ProviderConfig;
use crate::context::ProviderContext;
use crate::registry::{data_sources, DataSourceHandler, ReadResponse};
use crate::schema::provider_schema;

pub struct CamelProvider {
    context: Arc<ProviderContext>,
    handlers: BTreeMap<String, Box<dyn DataSourceHandler>>,
}

impl CamelProvider {
    pub async fn configure(config: &ProviderConfig) -> Result<Self, ReadError> {
        debug!("Configuring provider with {:?}", config);
        let context = ProviderContext::from_config(config).await?;
        Ok(CamelProvider::with_context(Arc::new(context)))
    }

    /// Configures from the Terraform-shaped provider block.
    pub async fn configure_from_value(config: &Value) -> Result<Self, ReadError> {
        let wire = from_terraform_object(config, &provider_schema().attributes)
            .map_err(|e| ReadError::UnexpectedConfiguration(e.to_string()))?;
        let config: ProviderConfig = serde_json::from_value(wire)
            .map_err(|e| ReadError::UnexpectedConfiguration(e.to_string()))?;
        CamelProvider::configure(&config).await
    }

    pub fn with_context(context: Arc<ProviderContext>) -> Self {
        let handlers = data_sources(&context)
            .into_iter()
            .map(|handler| (handler.type_name(), handler))
            .collect::<BTreeMap<_, _>>();
        info!(
            "Registered {} data sources (offline: {})",
            handlers.len(),
            context.is_offline()
        );
        CamelProvider { context, handlers }
    }

    pub fn schema(&self) -> Schema {
        provider_schema()
    }

    pub fn is_offline(&self) -> bool {
        self.context.is_offline()
    }

    /// Sorted type names of all data sources.
    pub fn type_names(&self) -> Vec<&str> {
        self.handlers.keys().map(String::as_str).collect()
    }

    pub fn data_source(&self, type_name: &str) -> Option<&dyn DataSourceHandler> {
        self.handlers.get(type_name).map(Box::as_ref)
    }

    pub async fn read(&self, type_name: &str, config: &Value) -> ReadResponse {
        match self.data_source(type_name) {
            Some(handler) => handler.read(config).await,
            None => ReadResponse::error(Diagnostic::error(
                "Unknown Data Source",
                format!("The provider does not serve a data source named {}", type_name),
            )),
        }
    }
}
