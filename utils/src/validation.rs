use std::sync::OnceLock;

use camel_defs::{ReadError, ResourceKey};
use regex::Regex;

const MAX_NAME_LENGTH: usize = 253;
const MAX_NAMESPACE_LENGTH: usize = 63;

fn subdomain_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
            .expect("valid regex")
    })
}

fn label_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").expect("valid regex"))
}

/// Checks that the key can address an object: the name is a DNS subdomain and
/// the namespace a DNS label (RFC 1123).
pub fn validate_resource_key(key: &ResourceKey) -> Result<(), ReadError> {
    check(
        "namespace",
        &key.namespace,
        MAX_NAMESPACE_LENGTH,
        label_regex(),
        "must consist of lower case alphanumeric characters or '-', and must start and end with an alphanumeric character",
    )?;
    check(
        "name",
        &key.name,
        MAX_NAME_LENGTH,
        subdomain_regex(),
        "must consist of lower case alphanumeric characters, '-' or '.', and must start and end with an alphanumeric character",
    )
}

fn check(
    field: &'static str,
    value: &str,
    max_length: usize,
    pattern: &Regex,
    message: &str,
) -> Result<(), ReadError> {
    let reason = if value.is_empty() {
        Some("must not be empty".to_string())
    } else if value.len() > max_length {
        Some(format!("must be no more than {} characters", max_length))
    } else if !pattern.is_match(value) {
        Some(message.to_string())
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ReadError::InvalidKey {
            field,
            value: value.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_keys() {
        assert!(validate_resource_key(&ResourceKey::new("ns1", "b1")).is_ok());
        assert!(validate_resource_key(&ResourceKey::new("camel-k", "my.kit-1")).is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let err = validate_resource_key(&ResourceKey::new("ns1", "")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid name \"\": must not be empty");
    }

    #[test]
    fn test_namespace_must_be_a_label() {
        assert!(validate_resource_key(&ResourceKey::new("my.ns", "b1")).is_err());
        assert!(validate_resource_key(&ResourceKey::new("Upper", "b1")).is_err());
        assert!(validate_resource_key(&ResourceKey::new(&"a".repeat(64), "b1")).is_err());
    }

    #[test]
    fn test_name_must_be_a_subdomain() {
        assert!(validate_resource_key(&ResourceKey::new("ns1", "-b1")).is_err());
        assert!(validate_resource_key(&ResourceKey::new("ns1", "b_1")).is_err());
        assert!(validate_resource_key(&ResourceKey::new("ns1", &"a".repeat(254))).is_err());
    }
}
