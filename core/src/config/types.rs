//! Configuration value types for prompt functions
//!
//! These types describe a prompt function completely: its template,
//! the variables it accepts, and the settings forwarded to the
//! completion backend. They carry no behavior beyond validation.

use serde::{Deserialize, Serialize};

/// Template dialects understood by the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateFormat {
    /// Handlebars-style `{{variable}}` templates
    #[serde(rename = "handlebars")]
    Handlebars,
    /// Any other format; rejected at template compile time
    #[serde(untagged)]
    Other(String),
}

impl Default for TemplateFormat {
    fn default() -> Self {
        TemplateFormat::Handlebars
    }
}

impl TemplateFormat {
    /// Get the format name as a string
    pub fn as_str(&self) -> &str {
        match self {
            TemplateFormat::Handlebars => "handlebars",
            TemplateFormat::Other(name) => name,
        }
    }
}

/// A variable the prompt template accepts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputVariable {
    /// Variable name as referenced in the template
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Default value used when the caller provides none
    #[serde(default)]
    pub default: Option<serde_json::Value>,

    /// Declared value type (informational, defaults to "string")
    #[serde(rename = "type", default = "default_variable_type")]
    pub type_name: String,

    /// Whether the caller must provide a value (or a default must exist)
    #[serde(default = "default_true")]
    pub is_required: bool,
}

fn default_variable_type() -> String {
    "string".to_string()
}

fn default_true() -> bool {
    true
}

/// Settings forwarded to the completion backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExecutionSettings {
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Temperature for sampling (0.0 to 2.0)
    pub temperature: Option<f32>,
    /// Top-p sampling parameter
    pub top_p: Option<f32>,
    /// Top-k sampling parameter (for compatible models)
    pub top_k: Option<u32>,
    /// Stop sequences
    pub stop_sequences: Option<Vec<String>>,
}

/// A fully parsed prompt function definition
///
/// Deserialized from a YAML document. Unknown keys are a structural
/// mismatch and fail deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptFunctionConfig {
    /// What the function does
    #[serde(default)]
    pub description: String,

    /// The prompt template source text
    pub template: String,

    /// Template dialect
    #[serde(default)]
    pub template_format: TemplateFormat,

    /// Variables the template accepts, in declaration order
    #[serde(default)]
    pub input_variables: Vec<InputVariable>,

    /// Backend settings for this function
    #[serde(default)]
    pub execution_settings: ExecutionSettings,

    /// Whether the function exposes a streaming invocation
    #[serde(default)]
    pub supports_streaming: bool,

    /// Whether the template is a chat-style prompt
    #[serde(default)]
    pub chat_prompt: bool,
}

impl PromptFunctionConfig {
    /// Create a minimal config from a template string
    pub fn new<S: Into<String>>(template: S) -> Self {
        Self {
            description: String::new(),
            template: template.into(),
            template_format: TemplateFormat::default(),
            input_variables: Vec::new(),
            execution_settings: ExecutionSettings::default(),
            supports_streaming: false,
            chat_prompt: false,
        }
    }

    /// Set the description
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }

    /// Add an input variable
    pub fn with_variable(mut self, variable: InputVariable) -> Self {
        self.input_variables.push(variable);
        self
    }

    /// Enable the streaming invocation
    pub fn with_streaming(mut self) -> Self {
        self.supports_streaming = true;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.template.trim().is_empty() {
            return Err("Template cannot be empty".to_string());
        }

        for variable in &self.input_variables {
            if variable.name.trim().is_empty() {
                return Err("Input variable name cannot be empty".to_string());
            }
        }

        // Reject duplicate variable declarations
        for (i, variable) in self.input_variables.iter().enumerate() {
            if self.input_variables[..i]
                .iter()
                .any(|other| other.name == variable.name)
            {
                return Err(format!("Duplicate input variable: {}", variable.name));
            }
        }

        // Validate temperature range
        if let Some(temp) = self.execution_settings.temperature {
            if !(0.0..=2.0).contains(&temp) {
                return Err("Temperature must be between 0.0 and 2.0".to_string());
            }
        }

        // Validate top_p range
        if let Some(top_p) = self.execution_settings.top_p {
            if !(0.0..=1.0).contains(&top_p) {
                return Err("Top-p must be between 0.0 and 1.0".to_string());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_defaults() {
        let config = PromptFunctionConfig::new("Say {{greeting}}")
            .with_description("greeter")
            .with_streaming();

        assert_eq!(config.template, "Say {{greeting}}");
        assert_eq!(config.description, "greeter");
        assert!(config.supports_streaming);
        assert!(!config.chat_prompt);
        assert_eq!(config.template_format, TemplateFormat::Handlebars);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_template() {
        let config = PromptFunctionConfig::new("   ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_variables() {
        let variable = InputVariable {
            name: "city".to_string(),
            description: String::new(),
            default: None,
            type_name: "string".to_string(),
            is_required: true,
        };
        let config = PromptFunctionConfig::new("{{city}}")
            .with_variable(variable.clone())
            .with_variable(variable);
        let err = config.validate().unwrap_err();
        assert!(err.contains("Duplicate"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_temperature() {
        let mut config = PromptFunctionConfig::new("{{x}}");
        config.execution_settings.temperature = Some(3.5);
        assert!(config.validate().is_err());
    }
}
