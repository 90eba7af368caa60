//! Prompt template compilation and rendering
//!
//! Templates are handlebars documents. Compilation happens once, at
//! function construction time, so syntax errors surface before any
//! invocation. Rendering is strict: referencing a variable with no
//! value is an error rather than silent empty output.

use crate::config::{PromptFunctionConfig, TemplateFormat};
use crate::error::{Result, TemplateError};
use handlebars::Handlebars;
use regex::Regex;
use std::collections::HashMap;

const TEMPLATE_NAME: &str = "prompt";

/// A compiled prompt template
#[derive(Debug)]
pub struct PromptTemplate {
    source: String,
    registry: Handlebars<'static>,
    variables: Vec<String>,
}

impl PromptTemplate {
    /// Compile a handlebars template from source text
    pub fn new<S: Into<String>>(source: S) -> Result<Self> {
        let source = source.into();

        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        registry
            .register_template_string(TEMPLATE_NAME, &source)
            .map_err(|e| TemplateError::Syntax {
                message: e.to_string(),
            })?;

        let variables = extract_variables(&source)?;

        Ok(Self {
            source,
            registry,
            variables,
        })
    }

    /// Compile the template declared by a configuration
    pub fn for_config(config: &PromptFunctionConfig) -> Result<Self> {
        match &config.template_format {
            TemplateFormat::Handlebars => Self::new(config.template.clone()),
            TemplateFormat::Other(format) => Err(TemplateError::UnsupportedFormat {
                format: format.clone(),
            }
            .into()),
        }
    }

    /// Get the raw template source
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Render the template with the given variable values
    pub fn render(&self, values: &HashMap<String, serde_json::Value>) -> Result<String> {
        self.registry
            .render(TEMPLATE_NAME, values)
            .map_err(|e| {
                TemplateError::Render {
                    message: e.to_string(),
                }
                .into()
            })
    }

    /// Names of the plain variables the template references, in order
    /// of first appearance. Extracted once at compile time; block
    /// helpers and partials are not variables and are skipped.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }
}

fn extract_variables(source: &str) -> Result<Vec<String>> {
    // Bare identifiers only; {{#if}}, {{/if}}, {{> partial}} and
    // {{! comments }} do not match.
    let pattern =
        Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").map_err(|e| TemplateError::Syntax {
            message: e.to_string(),
        })?;

    let mut seen = Vec::new();
    for capture in pattern.captures_iter(source) {
        let name = capture[1].to_string();
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    Ok(seen)
}
