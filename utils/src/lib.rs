mod json;
mod logging;
mod schema;
mod string_utils;
mod validation;

pub use json::{from_terraform_object, to_terraform_object};
pub use logging::setup_logging;
pub use schema::{attributes_for, description_for, SchemaUsage};
pub use string_utils::{data_source_type_name, manifest_type_name, to_snake_case};
pub use validation::validate_resource_key;
