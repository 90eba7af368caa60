//! Config-bound invocation of a prompt function
//!
//! A `CompletionInvoker` captures the shared configuration and compiled
//! template at construction time; each call only supplies the client
//! and the arguments. The streaming variant is a second invoker over
//! the same configuration.

use crate::config::PromptFunctionConfig;
use crate::error::{FunctionError, Result};
use crate::function::arguments::FunctionArguments;
use crate::function::result::FunctionResult;
use crate::llm::{CompletionChunk, CompletionClient, CompletionOptions, PromptMessage};
use crate::template::PromptTemplate;
use futures::Stream;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Invokes completions for one prompt function configuration
#[derive(Debug, Clone)]
pub(crate) struct CompletionInvoker {
    config: Arc<PromptFunctionConfig>,
    template: Arc<PromptTemplate>,
}

impl CompletionInvoker {
    pub(crate) fn new(config: Arc<PromptFunctionConfig>, template: Arc<PromptTemplate>) -> Self {
        Self { config, template }
    }

    /// Render the prompt and run a completion
    pub(crate) async fn invoke(
        &self,
        client: &dyn CompletionClient,
        arguments: &FunctionArguments,
    ) -> Result<FunctionResult> {
        let messages = self.build_messages(arguments)?;
        let options = CompletionOptions::from(&self.config.execution_settings);

        debug!(model = client.model_name(), "Invoking completion");
        let response = client.complete(messages, options).await?;

        Ok(FunctionResult::new(response.message.content, response.model)
            .with_usage(response.usage))
    }

    /// Render the prompt and run a streaming completion
    pub(crate) async fn invoke_stream<'a>(
        &self,
        client: &'a dyn CompletionClient,
        arguments: &FunctionArguments,
    ) -> Result<Box<dyn Stream<Item = Result<CompletionChunk>> + Send + Unpin + 'a>> {
        let messages = self.build_messages(arguments)?;
        let mut options = CompletionOptions::from(&self.config.execution_settings);
        options.stream = true;

        debug!(model = client.model_name(), "Invoking streaming completion");
        client.complete_stream(messages, options).await
    }

    fn build_messages(&self, arguments: &FunctionArguments) -> Result<Vec<PromptMessage>> {
        let values = self.resolve_values(arguments)?;
        let prompt = self.template.render(&values)?;
        Ok(vec![PromptMessage::user(prompt)])
    }

    /// Resolve template values: provided argument, else declared
    /// default, else an error for a required variable. Undeclared
    /// template variables have no default and are always required; a
    /// declared optional with no default is left unset for the strict
    /// renderer to report if the template actually needs it.
    fn resolve_values(
        &self,
        arguments: &FunctionArguments,
    ) -> Result<HashMap<String, serde_json::Value>> {
        let mut values: HashMap<String, serde_json::Value> = HashMap::new();

        for variable in &self.config.input_variables {
            if let Some(value) = arguments.get(&variable.name) {
                values.insert(variable.name.clone(), value.clone());
            } else if let Some(default) = &variable.default {
                values.insert(variable.name.clone(), default.clone());
            } else if variable.is_required {
                return Err(FunctionError::MissingArgument {
                    name: variable.name.clone(),
                }
                .into());
            }
        }

        for name in self.template.variables() {
            if values.contains_key(name) {
                continue;
            }
            if self
                .config
                .input_variables
                .iter()
                .any(|variable| variable.name == *name)
            {
                continue;
            }
            match arguments.get(name) {
                Some(value) => {
                    values.insert(name.clone(), value.clone());
                }
                None => {
                    return Err(FunctionError::MissingArgument { name: name.clone() }.into());
                }
            }
        }

        // Extra arguments pass through untouched; block helpers may
        // reference names that are not plain variables.
        for (name, value) in arguments.iter() {
            values
                .entry(name.clone())
                .or_insert_with(|| value.clone());
        }

        Ok(values)
    }
}
