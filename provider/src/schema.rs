use camel_defs::{
    Attribute, AttributeMode, AttributeType, Attributes, CamelResource, DataSourceMetadata,
    ManifestMetadata, Schema,
};
use camel_utils::{attributes_for, description_for, SchemaUsage};

use crate::config::ProviderConfig;

fn identity_attributes(attributes: &mut Attributes, id_description: &str) {
    attributes.insert(
        "id".to_string(),
        Attribute::new("id", AttributeType::String, AttributeMode::Computed)
            .with_description(id_description),
    );
}

fn spec_attribute<K: CamelResource>(usage: SchemaUsage, mode: AttributeMode) -> Attribute {
    let mut spec = Attribute::new(
        "spec",
        AttributeType::Object {
            attributes: attributes_for::<K::Spec>(usage),
        },
        mode,
    );
    spec.description = description_for::<K::Spec>();
    spec
}

pub fn data_source_schema<K: CamelResource>() -> Schema {
    let descriptor = K::descriptor();
    let mut attributes = Attributes::new();
    identity_attributes(
        &mut attributes,
        "Contains the value `metadata.name/metadata.namespace`.",
    );
    attributes.insert(
        "api_version".to_string(),
        Attribute::new("apiVersion", AttributeType::String, AttributeMode::Computed)
            .with_description("The API group of the requested resource."),
    );
    attributes.insert(
        "kind".to_string(),
        Attribute::new("kind", AttributeType::String, AttributeMode::Computed)
            .with_description("The type of the requested resource."),
    );

    let mut metadata = attributes_for::<DataSourceMetadata>(SchemaUsage::Input);
    for name in ["labels", "annotations"] {
        if let Some(attribute) = metadata.get_mut(name) {
            attribute.mode = AttributeMode::Computed;
        }
    }
    attributes.insert(
        "metadata".to_string(),
        Attribute::new(
            "metadata",
            AttributeType::Object {
                attributes: metadata,
            },
            AttributeMode::Required,
        )
        .with_description("Data that helps uniquely identify this object."),
    );
    attributes.insert(
        "spec".to_string(),
        spec_attribute::<K>(SchemaUsage::Computed, AttributeMode::Computed),
    );

    Schema {
        description: format!(
            "Reads a {} ({}) from the cluster.",
            descriptor.kind,
            descriptor.api_version()
        ),
        attributes,
    }
}

pub fn manifest_schema<K: CamelResource>() -> Schema {
    let descriptor = K::descriptor();
    let mut attributes = Attributes::new();
    identity_attributes(
        &mut attributes,
        "Contains the value `metadata.namespace/metadata.name`.",
    );
    attributes.insert(
        "yaml".to_string(),
        Attribute::new("yaml", AttributeType::String, AttributeMode::Computed)
            .with_description("The generated manifest in YAML format."),
    );
    attributes.insert(
        "metadata".to_string(),
        Attribute::new(
            "metadata",
            AttributeType::Object {
                attributes: attributes_for::<ManifestMetadata>(SchemaUsage::Input),
            },
            AttributeMode::Required,
        )
        .with_description("Data that helps uniquely identify this object."),
    );
    attributes.insert(
        "spec".to_string(),
        spec_attribute::<K>(SchemaUsage::Input, AttributeMode::Optional),
    );

    Schema {
        description: format!(
            "Renders a {} ({}) manifest without contacting a cluster.",
            descriptor.kind,
            descriptor.api_version()
        ),
        attributes,
    }
}

pub fn provider_schema() -> Schema {
    Schema {
        description: "Read-only access to the camel.apache.org custom resources.".to_string(),
        attributes: attributes_for::<ProviderConfig>(SchemaUsage::Input),
    }
}
