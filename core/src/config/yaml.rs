//! YAML loading for prompt function configurations

use super::PromptFunctionConfig;
use crate::error::{ConfigError, Result};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Parse a YAML document into a prompt function configuration.
///
/// An empty or `null` document yields `Ok(None)`: there is no
/// configuration at all, which callers reject with the
/// null-configuration guard. Malformed YAML and documents that do not
/// match the configuration schema fail here, before any configuration
/// object exists.
pub fn config_from_yaml(text: &str) -> Result<Option<PromptFunctionConfig>> {
    if text.trim().is_empty() {
        return Ok(None);
    }

    let value: serde_yaml::Value = serde_yaml::from_str(text)?;
    if value.is_null() {
        return Ok(None);
    }

    let config: PromptFunctionConfig = serde_yaml::from_value(value)?;
    debug!(
        template_format = config.template_format.as_str(),
        input_variables = config.input_variables.len(),
        "Parsed prompt function configuration"
    );
    Ok(Some(config))
}

/// Read a YAML file and parse it into a prompt function configuration
pub async fn config_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<Option<PromptFunctionConfig>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    let content = fs::read_to_string(path).await?;
    debug!("Loaded prompt function definition from: {}", path.display());
    config_from_yaml(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TemplateFormat;

    const FULL_DEFINITION: &str = r#"
description: Summarize a block of text
template: |
  Summarize the following text in {{word_count}} words or fewer:
  {{input}}
template_format: handlebars
input_variables:
  - name: input
    description: The text to summarize
  - name: word_count
    description: Target summary length
    type: number
    default: 50
    is_required: false
execution_settings:
  max_tokens: 512
  temperature: 0.3
supports_streaming: true
chat_prompt: false
"#;

    #[test]
    fn test_parse_full_definition() {
        let config = config_from_yaml(FULL_DEFINITION).unwrap().unwrap();

        assert_eq!(config.description, "Summarize a block of text");
        assert!(config.template.contains("{{word_count}}"));
        assert_eq!(config.template_format, TemplateFormat::Handlebars);
        assert_eq!(config.input_variables.len(), 2);
        assert_eq!(config.input_variables[0].name, "input");
        assert!(config.input_variables[0].is_required);
        assert_eq!(config.input_variables[1].type_name, "number");
        assert!(!config.input_variables[1].is_required);
        assert_eq!(config.execution_settings.max_tokens, Some(512));
        assert!(config.supports_streaming);
        assert!(!config.chat_prompt);
    }

    #[test]
    fn test_parse_minimal_definition_uses_defaults() {
        let config = config_from_yaml("template: Hello {{name}}")
            .unwrap()
            .unwrap();

        assert_eq!(config.description, "");
        assert_eq!(config.template_format, TemplateFormat::Handlebars);
        assert!(config.input_variables.is_empty());
        assert!(!config.supports_streaming);
        assert!(!config.chat_prompt);
    }

    #[test]
    fn test_missing_template_fails() {
        let err = config_from_yaml("description: no template here").unwrap_err();
        assert!(err.to_string().contains("template"));
    }

    #[test]
    fn test_unknown_field_fails() {
        let result = config_from_yaml("template: hi\nbogus_field: 1");
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_yaml_fails() {
        let result = config_from_yaml("template: [unbalanced");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_and_null_documents_yield_none() {
        assert!(config_from_yaml("").unwrap().is_none());
        assert!(config_from_yaml("   \n").unwrap().is_none());
        assert!(config_from_yaml("null").unwrap().is_none());
        assert!(config_from_yaml("~").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("summarize.yaml");
        std::fs::write(&path, FULL_DEFINITION).unwrap();

        let config = config_from_yaml_file(&path).await.unwrap().unwrap();
        assert_eq!(config.description, "Summarize a block of text");
    }

    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let err = config_from_yaml_file("/nonexistent/definition.yaml")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
