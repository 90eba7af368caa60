//! Prompt function construction and invocation

pub mod arguments;
pub mod invoker;
pub mod metadata;
pub mod prompt_function;
pub mod registry;
pub mod result;

pub use arguments::FunctionArguments;
pub use metadata::{
    parameters_from_config, parameters_schema, return_parameter, FunctionDefinition,
    ParameterMetadata,
};
pub use prompt_function::PromptFunction;
pub use registry::FunctionRegistry;
pub use result::FunctionResult;
