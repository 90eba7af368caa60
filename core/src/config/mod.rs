//! Prompt function configuration
//!
//! A configuration is a pure value object: fully populated at parse
//! time, immutable afterwards. All YAML handling lives in `yaml`.

pub mod types;
pub mod yaml;

pub use types::{ExecutionSettings, InputVariable, PromptFunctionConfig, TemplateFormat};
pub use yaml::{config_from_yaml, config_from_yaml_file};
