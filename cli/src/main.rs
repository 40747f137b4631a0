mod commands;
mod utils;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use camel_provider::{CamelProvider, ProviderConfig, ProviderContext};
use camel_utils::setup_logging;
use clap::{Parser, Subcommand};
use log::error;

use commands::{data_source, provider};

#[derive(Parser)]
#[command(name = "camel-tf")]
#[command(about = "Read and render camel.apache.org custom resources", long_about = None)]
#[command(version = env!("APP_VERSION"))]
struct Cli {
    /// Refuse live reads, only render manifests
    #[arg(long, env = "CAMEL_PROVIDER_OFFLINE", global = true)]
    offline: bool,

    /// Path to the kubeconfig file
    #[arg(long, global = true)]
    kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use
    #[arg(long, env = "CAMEL_PROVIDER_CONTEXT", global = true)]
    context: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered data sources
    DataSources,
    /// Print the schema of a data source, or of the provider block
    Schema {
        type_name: Option<String>,
    },
    /// Read a resource from the cluster
    Read {
        type_name: String,
        #[arg(short, long)]
        namespace: String,
        #[arg(long)]
        name: String,
    },
    /// Render a manifest from a YAML or JSON configuration file
    Render {
        type_name: String,
        #[arg(short, long)]
        file: PathBuf,
        /// Print only the rendered YAML document
        #[arg(long)]
        yaml_only: bool,
    },
}

impl Cli {
    fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            offline: self.offline,
            kubeconfig: self.kubeconfig.clone(),
            context: self.context.clone(),
        }
    }
}

#[tokio::main]
async fn main() {
    let _ = rustls::crypto::ring::default_provider().install_default();

    if let Err(e) = setup_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();
    match run(cli).await {
        Ok(false) => {}
        Ok(true) => std::process::exit(1),
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    }
}

/// Returns whether an error diagnostic was reported.
async fn run(cli: Cli) -> Result<bool> {
    match &cli.command {
        Commands::DataSources => {
            provider::handle_data_sources(&static_provider());
            Ok(false)
        }
        Commands::Schema { type_name } => {
            provider::handle_schema(&static_provider(), type_name.as_deref())?;
            Ok(false)
        }
        Commands::Read {
            type_name,
            namespace,
            name,
        } => {
            let provider = CamelProvider::configure(&cli.provider_config())
                .await
                .map_err(|e| {
                    let diagnostic = e.to_diagnostic();
                    anyhow!("{}\n\n{}", diagnostic.summary, diagnostic.detail)
                })?;
            data_source::handle_read(&provider, type_name, namespace, name).await
        }
        Commands::Render {
            type_name,
            file,
            yaml_only,
        } => data_source::handle_render(&static_provider(), type_name, file, *yaml_only).await,
    }
}

// Listing schemas and rendering manifests never need a cluster.
fn static_provider() -> CamelProvider {
    CamelProvider::with_context(Arc::new(ProviderContext::offline()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "camel-tf",
            "read",
            "k8s_camel_apache_org_build_v1",
            "--namespace",
            "ns1",
            "--name",
            "b1",
            "--context",
            "kind-camel",
        ])
        .unwrap();

        assert_eq!(cli.context.as_deref(), Some("kind-camel"));
        match cli.command {
            Commands::Read {
                namespace, name, ..
            } => {
                assert_eq!(namespace, "ns1");
                assert_eq!(name, "b1");
            }
            _ => panic!("expected read"),
        }
    }
}
