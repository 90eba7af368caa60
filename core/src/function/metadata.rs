//! Parameter metadata derived from a function configuration

use crate::config::PromptFunctionConfig;
use crate::template::PromptTemplate;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Describes one expected input (or the output) of a prompt function
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParameterMetadata {
    /// Parameter name
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Default value used when the caller provides none
    pub default_value: Option<serde_json::Value>,

    /// Declared value type
    pub type_name: String,

    /// Whether the caller must provide a value
    pub required: bool,
}

/// Derive the ordered parameter list for a configuration.
///
/// Declared input variables come first, in declaration order. Template
/// variables the YAML never declared follow, as required string
/// parameters with no default. The derivation is deterministic and
/// recomputed on every function construction.
pub fn parameters_from_config(
    config: &PromptFunctionConfig,
    template: &PromptTemplate,
) -> Vec<ParameterMetadata> {
    let mut parameters: Vec<ParameterMetadata> = config
        .input_variables
        .iter()
        .map(|variable| ParameterMetadata {
            name: variable.name.clone(),
            description: variable.description.clone(),
            default_value: variable.default.clone(),
            type_name: variable.type_name.clone(),
            required: variable.is_required,
        })
        .collect();

    for name in template.variables() {
        if parameters.iter().any(|p| p.name == *name) {
            continue;
        }
        parameters.push(ParameterMetadata {
            name: name.clone(),
            description: String::new(),
            default_value: None,
            type_name: "string".to_string(),
            required: true,
        });
    }

    parameters
}

/// The fixed descriptor for a prompt function's return value
pub fn return_parameter() -> ParameterMetadata {
    ParameterMetadata {
        name: "return".to_string(),
        description: "The completion result".to_string(),
        default_value: None,
        type_name: "FunctionResult".to_string(),
        required: true,
    }
}

/// Exported shape of a function, suitable for function-calling APIs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDefinition {
    /// Fully qualified function name
    pub name: String,

    /// Description of what the function does
    pub description: String,

    /// JSON schema for the function parameters
    pub parameters: serde_json::Value,
}

/// Build a JSON schema object from a parameter list
pub fn parameters_schema(parameters: &[ParameterMetadata]) -> serde_json::Value {
    let mut properties = serde_json::Map::new();
    let mut required = Vec::new();

    for parameter in parameters {
        let mut property = serde_json::Map::new();
        property.insert("type".to_string(), json!(schema_type(&parameter.type_name)));
        if !parameter.description.is_empty() {
            property.insert("description".to_string(), json!(parameter.description));
        }
        if let Some(default) = &parameter.default_value {
            property.insert("default".to_string(), default.clone());
        }
        properties.insert(parameter.name.clone(), serde_json::Value::Object(property));

        if parameter.required && parameter.default_value.is_none() {
            required.push(json!(parameter.name));
        }
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

fn schema_type(type_name: &str) -> &str {
    match type_name {
        "string" | "number" | "integer" | "boolean" | "array" | "object" => type_name,
        _ => "string",
    }
}
