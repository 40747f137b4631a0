use anyhow::{anyhow, Result};
use camel_provider::CamelProvider;

pub fn handle_data_sources(provider: &CamelProvider) {
    println!("{:<60} {:<28} {:<20}", "Type", "ApiVersion", "Kind");
    for type_name in provider.type_names() {
        if let Some(handler) = provider.data_source(type_name) {
            let descriptor = handler.descriptor();
            println!(
                "{:<60} {:<28} {:<20}",
                type_name,
                descriptor.api_version(),
                descriptor.kind
            );
        }
    }
}

/// Prints the provider schema when no type is given.
pub fn handle_schema(provider: &CamelProvider, type_name: Option<&str>) -> Result<()> {
    let schema = match type_name {
        Some(type_name) => provider
            .data_source(type_name)
            .map(|handler| handler.schema().clone())
            .ok_or_else(|| anyhow!("Unknown data source {}", type_name))?,
        None => provider.schema(),
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
