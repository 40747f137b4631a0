mod utils;
use utils::{offline_provider, online_provider, FakeCluster};

#[cfg(test)]
mod data_source_tests {
    use super::*;
    use camel_defs::{Build, PipeSpec, ResourceKey};
    use camel_provider::{DataSource, ProviderContext};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::sync::Arc;

    const BUILD: &str = "k8s_camel_apache_org_build_v1";

    fn config(name: &str, namespace: &str) -> Value {
        json!({
            "id": null,
            "api_version": null,
            "kind": null,
            "metadata": {"name": name, "namespace": namespace, "labels": null, "annotations": null},
            "spec": null
        })
    }

    fn build_object(spec: Value) -> Value {
        json!({
            "apiVersion": "camel.apache.org/v1",
            "kind": "Build",
            "metadata": {
                "name": "b1",
                "namespace": "ns1",
                "uid": "8d2c0a1e",
                "labels": {"app.kubernetes.io/name": "demo"}
            },
            "spec": spec,
            "status": {"phase": "Succeeded"}
        })
    }

    #[tokio::test]
    async fn test_read_build() {
        let cluster = Arc::new(FakeCluster::default().with_object(
            "builds",
            "ns1",
            "b1",
            build_object(json!({
                "timeout": "5m",
                "maxRunningBuilds": 3,
                "configuration": {"requestCPU": "500m", "nodeSelector": {"kubernetes.io/os": "linux"}}
            })),
        ));
        let provider = online_provider(cluster.clone());

        let response = provider.read(BUILD, &config("b1", "ns1")).await;

        assert!(response.diagnostics.is_empty());
        let state = response.state.unwrap();
        assert_eq!(state["id"], json!("b1/ns1"));
        assert_eq!(state["api_version"], json!("camel.apache.org/v1"));
        assert_eq!(state["kind"], json!("Build"));
        assert_eq!(state["metadata"]["name"], json!("b1"));
        assert_eq!(
            state["metadata"]["labels"],
            json!({"app.kubernetes.io/name": "demo"})
        );
        assert_eq!(state["metadata"]["annotations"], json!(null));
        assert_eq!(state["spec"]["timeout"], json!("5m"));
        assert_eq!(state["spec"]["max_running_builds"], json!(3));
        assert_eq!(state["spec"]["configuration"]["request_cpu"], json!("500m"));
        assert_eq!(
            state["spec"]["configuration"]["node_selector"],
            json!({"kubernetes.io/os": "linux"})
        );
        assert_eq!(state["spec"]["tasks"], json!(null));
        assert!(state.get("status").is_none());
        assert_eq!(cluster.calls(), 1);
    }

    #[tokio::test]
    async fn test_identity_ignores_server_response() {
        let mut object = build_object(json!({"timeout": "5m"}));
        object["kind"] = json!("SomethingElse");
        object["metadata"]["name"] = json!("other");
        let cluster = Arc::new(FakeCluster::default().with_object("builds", "ns1", "b1", object));
        let provider = online_provider(cluster);

        let state = provider
            .read(BUILD, &config("b1", "ns1"))
            .await
            .state
            .unwrap();

        assert_eq!(state["kind"], json!("Build"));
        assert_eq!(state["metadata"]["name"], json!("b1"));
        assert_eq!(state["id"], json!("b1/ns1"));
    }

    #[tokio::test]
    async fn test_offline_refuses_live_read() {
        let provider = offline_provider();

        let response = provider.read(BUILD, &config("b1", "ns1")).await;

        assert!(response.state.is_none());
        assert_eq!(response.diagnostics.len(), 1);
        assert_eq!(response.diagnostics[0].summary, "Provider in Offline Mode");
    }

    #[tokio::test]
    async fn test_not_found_names_the_key() {
        let cluster = Arc::new(FakeCluster::default());
        let provider = online_provider(cluster.clone());

        let response = provider.read(BUILD, &config("missing", "ns1")).await;

        assert!(response.state.is_none());
        assert_eq!(response.diagnostics.len(), 1);
        let diagnostic = &response.diagnostics[0];
        assert_eq!(diagnostic.summary, "Unable to find resource");
        assert!(diagnostic.detail.contains("Namespace: ns1"));
        assert!(diagnostic.detail.contains("Name: missing"));
        assert_eq!(cluster.calls(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let cluster = Arc::new(FakeCluster::default().failing("HyperError", "connection refused"));
        let provider = online_provider(cluster);

        let response = provider.read(BUILD, &config("b1", "ns1")).await;

        assert!(response.state.is_none());
        assert_eq!(response.diagnostics[0].summary, "Unable to GET resource");
        assert!(response.diagnostics[0]
            .detail
            .contains("Error message: connection refused"));
    }

    #[tokio::test]
    async fn test_malformed_spec_is_internal_error() {
        let cluster = Arc::new(FakeCluster::default().with_object(
            "builds",
            "ns1",
            "b1",
            build_object(json!({"timeout": 5})),
        ));
        let provider = online_provider(cluster);

        let response = provider.read(BUILD, &config("b1", "ns1")).await;

        assert!(response.state.is_none());
        assert_eq!(response.diagnostics[0].summary, "Internal Provider Error");
    }

    #[tokio::test]
    async fn test_invalid_key_is_rejected_before_fetch() {
        let cluster = Arc::new(FakeCluster::default());
        let provider = online_provider(cluster.clone());

        let response = provider.read(BUILD, &config("", "ns1")).await;

        assert_eq!(
            response.diagnostics[0].summary,
            "Invalid Resource Identifier"
        );
        assert_eq!(cluster.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_metadata_is_unexpected_configuration() {
        let provider = online_provider(Arc::new(FakeCluster::default()));

        let response = provider.read(BUILD, &json!({"spec": null})).await;

        assert_eq!(response.diagnostics[0].summary, "Unexpected Configuration");
        assert!(response.diagnostics[0].detail.contains("metadata"));
    }

    #[tokio::test]
    async fn test_kamelet_binding_uses_alpha_version() {
        let cluster = Arc::new(FakeCluster::default().with_object(
            "kameletbindings",
            "ns1",
            "kb1",
            json!({
                "apiVersion": "camel.apache.org/v1alpha1",
                "kind": "KameletBinding",
                "metadata": {"name": "kb1", "namespace": "ns1"},
                "spec": {
                    "source": {"ref": {"kind": "Kamelet", "name": "timer-source"}},
                    "sink": {"uri": "log:info"},
                    "replicas": 2
                }
            }),
        ));
        let data_source =
            DataSource::<camel_defs::KameletBinding>::new(Arc::new(ProviderContext::online(cluster)));

        let state = data_source
            .read(&ResourceKey::new("ns1", "kb1"))
            .await
            .unwrap();

        assert_eq!(state.api_version, "camel.apache.org/v1alpha1");
        let spec: PipeSpec = state.spec.unwrap();
        assert_eq!(spec.replicas, Some(2));
        assert_eq!(spec.sink.unwrap().uri.as_deref(), Some("log:info"));
    }

    #[tokio::test]
    async fn test_missing_spec_is_null() {
        let cluster = Arc::new(FakeCluster::default().with_object(
            "builds",
            "ns1",
            "b1",
            json!({
                "apiVersion": "camel.apache.org/v1",
                "kind": "Build",
                "metadata": {"name": "b1", "namespace": "ns1"}
            }),
        ));
        let data_source = DataSource::<Build>::new(Arc::new(ProviderContext::online(cluster)));

        let state = data_source
            .read(&ResourceKey::new("ns1", "b1"))
            .await
            .unwrap();

        assert_eq!(state.spec, None);
        assert_eq!(state.metadata.labels, None);
    }

    fn live_type_names() -> Vec<String> {
        offline_provider()
            .type_names()
            .into_iter()
            .filter(|name| !name.ends_with("_manifest"))
            .map(str::to_string)
            .collect()
    }

    #[tokio::test]
    async fn test_every_kind_refuses_live_read_offline() {
        let provider = offline_provider();
        let names = live_type_names();
        assert_eq!(names.len(), 9);

        for type_name in names {
            let response = provider.read(&type_name, &config("r1", "ns1")).await;

            assert!(response.state.is_none(), "{}", type_name);
            assert_eq!(response.diagnostics.len(), 1, "{}", type_name);
            assert_eq!(
                response.diagnostics[0].summary,
                "Provider in Offline Mode",
                "{}",
                type_name
            );
        }
    }

    #[tokio::test]
    async fn test_every_kind_takes_identity_from_descriptor() {
        for type_name in live_type_names() {
            let descriptor = offline_provider()
                .data_source(&type_name)
                .unwrap()
                .descriptor();
            let cluster = Arc::new(FakeCluster::default().with_object(
                descriptor.plural,
                "ns1",
                "r1",
                json!({
                    "apiVersion": "example.com/v9",
                    "kind": "Wrong",
                    "metadata": {"name": "r1", "namespace": "ns1"}
                }),
            ));
            let provider = online_provider(cluster.clone());

            let response = provider.read(&type_name, &config("r1", "ns1")).await;

            assert!(response.diagnostics.is_empty(), "{}", type_name);
            let state = response.state.unwrap();
            assert_eq!(state["api_version"], json!(descriptor.api_version()));
            assert_eq!(state["kind"], json!(descriptor.kind));
            assert_eq!(state["id"], json!("r1/ns1"));
            assert_eq!(cluster.calls(), 1, "{}", type_name);
        }
    }

    #[tokio::test]
    async fn test_computed_spec_in_config_is_rejected() {
        let cluster = Arc::new(FakeCluster::default());
        let provider = online_provider(cluster.clone());
        let mut config = config("b1", "ns1");
        config["spec"] = json!({"timeout": "5m"});

        let response = provider.read(BUILD, &config).await;

        assert!(response.state.is_none());
        assert_eq!(response.diagnostics[0].summary, "Unexpected Configuration");
        assert!(response.diagnostics[0]
            .detail
            .contains("computed attribute spec cannot be set"));
        assert_eq!(cluster.calls(), 0);
    }
}
