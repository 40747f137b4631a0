use std::path::Path;

use anyhow::{bail, Result};
use camel_provider::CamelProvider;
use log::info;

use crate::utils::{load_snapshot, print_response, read_config};

const MANIFEST_SUFFIX: &str = "_manifest";

pub async fn handle_read(
    provider: &CamelProvider,
    type_name: &str,
    namespace: &str,
    name: &str,
) -> Result<bool> {
    if type_name.ends_with(MANIFEST_SUFFIX) {
        bail!("{} is a manifest, use the render command", type_name);
    }
    info!("Reading {} {}/{}", type_name, namespace, name);
    let response = provider
        .read(type_name, &read_config(namespace, name))
        .await;
    print_response(&response, false)
}

pub async fn handle_render(
    provider: &CamelProvider,
    type_name: &str,
    file: &Path,
    yaml_only: bool,
) -> Result<bool> {
    if !type_name.ends_with(MANIFEST_SUFFIX) {
        bail!("{} is a live data source, use the read command", type_name);
    }
    let snapshot = load_snapshot(file)?;
    let response = provider.read(type_name, &snapshot).await;
    print_response(&response, yaml_only)
}
