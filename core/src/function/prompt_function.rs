//! The invokable prompt function wrapper

use crate::config::{config_from_yaml, config_from_yaml_file, PromptFunctionConfig};
use crate::error::{CompletionError, ConfigError, Error, Result};
use crate::function::arguments::FunctionArguments;
use crate::function::invoker::CompletionInvoker;
use crate::function::metadata::{
    parameters_from_config, parameters_schema, return_parameter, FunctionDefinition,
    ParameterMetadata,
};
use crate::function::result::FunctionResult;
use crate::llm::{CompletionChunk, CompletionClient};
use crate::template::PromptTemplate;
use futures::Stream;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// A callable function built from a prompt definition.
///
/// Construction binds the configuration into an invoker (and, when the
/// configuration enables it, a second streaming invoker). Execution is
/// deferred entirely to the `CompletionClient` passed at call time; the
/// wrapper itself holds no mutable state and performs no I/O.
#[derive(Debug)]
pub struct PromptFunction {
    name: String,
    plugin_name: String,
    description: String,
    parameters: Vec<ParameterMetadata>,
    return_parameter: ParameterMetadata,
    invoker: CompletionInvoker,
    stream_invoker: Option<CompletionInvoker>,
    chat_template: Option<String>,
}

impl PromptFunction {
    /// Build a function from an already parsed configuration.
    ///
    /// `None` means the YAML document held no configuration at all and
    /// fails with a fixed error. Parse failures never reach this guard;
    /// they surface from the YAML layer first.
    pub fn from_config(
        config: Option<PromptFunctionConfig>,
        plugin_name: &str,
        function_name: &str,
    ) -> Result<Self> {
        let config = config.ok_or(ConfigError::MissingConfiguration)?;
        config.validate().map_err(Error::Generic)?;

        let template = Arc::new(PromptTemplate::for_config(&config)?);
        let parameters = parameters_from_config(&config, &template);

        let config = Arc::new(config);
        let invoker = CompletionInvoker::new(Arc::clone(&config), Arc::clone(&template));
        let stream_invoker = config
            .supports_streaming
            .then(|| CompletionInvoker::new(Arc::clone(&config), Arc::clone(&template)));
        let chat_template = config.chat_prompt.then(|| config.template.clone());

        debug!(
            plugin = plugin_name,
            function = function_name,
            parameters = parameters.len(),
            streaming = stream_invoker.is_some(),
            "Constructed prompt function"
        );

        Ok(Self {
            name: function_name.to_string(),
            plugin_name: plugin_name.to_string(),
            description: config.description.clone(),
            parameters,
            return_parameter: return_parameter(),
            invoker,
            stream_invoker,
            chat_template,
        })
    }

    /// Build a function from YAML text
    pub fn from_yaml(text: &str, plugin_name: &str, function_name: &str) -> Result<Self> {
        let config = config_from_yaml(text)?;
        Self::from_config(config, plugin_name, function_name)
    }

    /// Build a function from a YAML file
    pub async fn from_yaml_file<P: AsRef<Path>>(
        path: P,
        plugin_name: &str,
        function_name: &str,
    ) -> Result<Self> {
        let config = config_from_yaml_file(path).await?;
        Self::from_config(config, plugin_name, function_name)
    }

    /// Get the function name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the plugin name
    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }

    /// Get the fully qualified `plugin.function` name
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.plugin_name, self.name)
    }

    /// Get the function description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the ordered parameter metadata
    pub fn parameters(&self) -> &[ParameterMetadata] {
        &self.parameters
    }

    /// Get the return-value descriptor
    pub fn return_parameter(&self) -> &ParameterMetadata {
        &self.return_parameter
    }

    /// Whether this function exposes a streaming invocation
    pub fn supports_streaming(&self) -> bool {
        self.stream_invoker.is_some()
    }

    /// The raw chat template, present only for chat-style prompts
    pub fn chat_template(&self) -> Option<&str> {
        self.chat_template.as_deref()
    }

    /// Export the function shape for function-calling APIs
    pub fn definition(&self) -> FunctionDefinition {
        FunctionDefinition {
            name: self.qualified_name(),
            description: self.description.clone(),
            parameters: parameters_schema(&self.parameters),
        }
    }

    /// Run a completion with the given client and arguments
    pub async fn invoke(
        &self,
        client: &dyn CompletionClient,
        arguments: &FunctionArguments,
    ) -> Result<FunctionResult> {
        self.invoker.invoke(client, arguments).await
    }

    /// Run a streaming completion.
    ///
    /// Fails with `StreamingUnsupported` when the configuration did not
    /// enable streaming for this function.
    pub async fn invoke_stream<'a>(
        &self,
        client: &'a dyn CompletionClient,
        arguments: &FunctionArguments,
    ) -> Result<Box<dyn Stream<Item = Result<CompletionChunk>> + Send + Unpin + 'a>> {
        let invoker = self
            .stream_invoker
            .as_ref()
            .ok_or(CompletionError::StreamingUnsupported)?;
        invoker.invoke_stream(client, arguments).await
    }
}
