use heck::ToSnakeCase;

pub fn to_snake_case(s: &str) -> String {
    s.to_snake_case()
}

/// Terraform type name of a data source, e.g. `k8s_camel_apache_org_build_v1`.
pub fn data_source_type_name(group: &str, kind: &str, version: &str) -> String {
    format!(
        "k8s_{}_{}_{}",
        group.replace(&['.', '-'][..], "_"),
        to_snake_case(kind),
        version
    )
}

pub fn manifest_type_name(group: &str, kind: &str, version: &str) -> String {
    format!("{}_manifest", data_source_type_name(group, kind, version))
}
