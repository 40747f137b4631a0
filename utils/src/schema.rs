use camel_defs::{Attribute, AttributeMode, AttributeType, Attributes};
use schemars::gen::SchemaSettings;
use schemars::schema::{InstanceType, Schema, SchemaObject, SingleOrVec};
use schemars::JsonSchema;

use crate::string_utils::to_snake_case;

/// How attributes derived from a Rust type are exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaUsage {
    /// Every attribute is filled in by the provider.
    Computed,
    /// Attributes are supplied by the caller; fields the type marks as required
    /// become required, everything else optional.
    Input,
}

/// Derives the attribute tree of `T` from its JSON schema. Doc comments become
/// descriptions, wire names are kept next to the snake_case attribute names.
pub fn attributes_for<T: JsonSchema>(usage: SchemaUsage) -> Attributes {
    let root = root_schema_for::<T>();
    object_attributes(&root, usage)
}

pub fn description_for<T: JsonSchema>() -> Option<String> {
    description(&root_schema_for::<T>())
}

fn root_schema_for<T: JsonSchema>() -> SchemaObject {
    let settings = SchemaSettings::draft07().with(|s| {
        s.inline_subschemas = true;
        s.option_nullable = false;
        s.option_add_null_type = false;
    });
    settings.into_generator().into_root_schema_for::<T>().schema
}

fn object_attributes(schema: &SchemaObject, usage: SchemaUsage) -> Attributes {
    let mut attributes = Attributes::new();
    let Some(object) = schema.object.as_ref() else {
        return attributes;
    };

    for (wire_name, property) in &object.properties {
        let property = resolve(property);
        let mode = match usage {
            SchemaUsage::Computed => AttributeMode::Computed,
            SchemaUsage::Input if object.required.contains(wire_name) => AttributeMode::Required,
            SchemaUsage::Input => AttributeMode::Optional,
        };
        let mut attribute = Attribute::new(wire_name, attribute_type(&property, usage), mode);
        attribute.description = description(&property);
        attributes.insert(to_snake_case(wire_name), attribute);
    }
    attributes
}

// A documented field whose type is a subschema is emitted as a single-element
// `allOf` carrying the description; unwrap it so the type is visible.
fn resolve(schema: &Schema) -> SchemaObject {
    let object = match schema {
        Schema::Bool(_) => return SchemaObject::default(),
        Schema::Object(object) => object,
    };

    let single = object
        .subschemas
        .as_ref()
        .and_then(|sub| sub.all_of.as_ref())
        .filter(|all_of| all_of.len() == 1 && object.instance_type.is_none());

    match single {
        Some(all_of) => {
            let mut inner = resolve(&all_of[0]);
            if let Some(description) = description(object) {
                inner.metadata().description = Some(description);
            }
            inner
        }
        None => object.clone(),
    }
}

fn instance_type(schema: &SchemaObject) -> Option<InstanceType> {
    match schema.instance_type.as_ref()? {
        SingleOrVec::Single(single) => Some(**single),
        SingleOrVec::Vec(types) => types
            .iter()
            .copied()
            .find(|candidate| *candidate != InstanceType::Null),
    }
}

fn attribute_type(schema: &SchemaObject, usage: SchemaUsage) -> AttributeType {
    match instance_type(schema) {
        Some(InstanceType::String) => AttributeType::String,
        Some(InstanceType::Integer) => AttributeType::Int64,
        Some(InstanceType::Number) => AttributeType::Float64,
        Some(InstanceType::Boolean) => AttributeType::Bool,
        Some(InstanceType::Array) => {
            let element = match schema.array.as_ref().and_then(|array| array.items.as_ref()) {
                Some(SingleOrVec::Single(item)) => attribute_type(&resolve(item), usage),
                _ => AttributeType::Dynamic,
            };
            AttributeType::List {
                element: Box::new(element),
            }
        }
        Some(InstanceType::Object) => {
            let object = schema.object.as_ref();
            let has_properties = object.map_or(false, |o| !o.properties.is_empty());
            let additional = object.and_then(|o| o.additional_properties.as_ref());
            if has_properties {
                AttributeType::Object {
                    attributes: object_attributes(schema, usage),
                }
            } else if let Some(Schema::Object(element)) = additional.map(|a| a.as_ref()) {
                AttributeType::Map {
                    element: Box::new(attribute_type(&resolve(&Schema::Object(element.clone())), usage)),
                }
            } else {
                AttributeType::Dynamic
            }
        }
        Some(InstanceType::Null) | None => AttributeType::Dynamic,
    }
}

fn description(schema: &SchemaObject) -> Option<String> {
    schema
        .metadata
        .as_ref()
        .and_then(|metadata| metadata.description.clone())
        .map(|description| description.trim().to_string())
        .filter(|description| !description.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camel_defs::{BuildSpec, CamelCatalogSpec, ManifestMetadata};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_spec_attributes_are_computed() {
        let attributes = attributes_for::<BuildSpec>(SchemaUsage::Computed);

        let timeout = &attributes["timeout"];
        assert_eq!(timeout.wire_name, "timeout");
        assert_eq!(timeout.attribute_type, AttributeType::String);
        assert_eq!(timeout.mode, AttributeMode::Computed);
        assert!(timeout.description.as_deref().unwrap().contains("maximum execution"));

        assert_eq!(
            attributes["max_running_builds"].attribute_type,
            AttributeType::Int64
        );
    }

    #[test]
    fn test_nested_objects_and_lists() {
        let attributes = attributes_for::<BuildSpec>(SchemaUsage::Computed);

        let AttributeType::List { element } = &attributes["tasks"].attribute_type else {
            panic!("tasks should be a list");
        };
        let AttributeType::Object { attributes: task } = element.as_ref() else {
            panic!("tasks should hold objects");
        };
        let AttributeType::Object { attributes: builder } = &task["builder"].attribute_type else {
            panic!("builder should be an object");
        };
        assert_eq!(builder["base_image"].wire_name, "baseImage");

        let AttributeType::Object {
            attributes: configuration,
        } = &attributes["configuration"].attribute_type
        else {
            panic!("configuration should be an object");
        };
        assert_eq!(configuration["request_cpu"].wire_name, "requestCPU");
        assert_eq!(
            configuration["node_selector"].attribute_type,
            AttributeType::Map {
                element: Box::new(AttributeType::String)
            }
        );
    }

    #[test]
    fn test_input_usage_marks_required_fields() {
        let attributes = attributes_for::<CamelCatalogSpec>(SchemaUsage::Input);
        assert_eq!(attributes["runtime"].mode, AttributeMode::Required);

        let AttributeType::Object { attributes: runtime } = &attributes["runtime"].attribute_type
        else {
            panic!("runtime should be an object");
        };
        assert_eq!(runtime["version"].mode, AttributeMode::Required);
        assert_eq!(runtime["metadata"].mode, AttributeMode::Optional);

        let metadata = attributes_for::<ManifestMetadata>(SchemaUsage::Input);
        assert_eq!(metadata["name"].mode, AttributeMode::Required);
        assert_eq!(metadata["labels"].mode, AttributeMode::Optional);
    }

    #[test]
    fn test_free_form_fields_are_dynamic() {
        let attributes = attributes_for::<camel_defs::IntegrationSpec>(SchemaUsage::Computed);
        assert_eq!(attributes["traits"].attribute_type, AttributeType::Dynamic);
        assert_eq!(
            attributes["flows"].attribute_type,
            AttributeType::List {
                element: Box::new(AttributeType::Dynamic)
            }
        );
    }
}
