//! # PromptFn Core
//!
//! Core library for PromptFn - invokable LLM prompt functions defined
//! in YAML.
//!
//! A YAML document describes a prompt template, its input variables,
//! and its backend settings. [`PromptFunction::from_yaml`] turns that
//! document plus a plugin/function name pair into a callable wrapper;
//! actual completion execution is deferred to a
//! [`llm::CompletionClient`] supplied at invocation time.

// Core modules
pub mod config;
pub mod error;
pub mod function;
pub mod llm;
pub mod template;

// Re-export commonly used types
pub use config::{ExecutionSettings, InputVariable, PromptFunctionConfig, TemplateFormat};
pub use error::{Error, Result};
pub use function::{
    FunctionArguments, FunctionDefinition, FunctionRegistry, FunctionResult, ParameterMetadata,
    PromptFunction,
};
pub use llm::{CompletionClient, CompletionOptions, CompletionResponse, PromptMessage};
pub use template::PromptTemplate;

/// Current version of the promptfn-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
