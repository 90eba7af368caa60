//! Registry of prompt functions, keyed by `plugin.function`

use crate::function::metadata::FunctionDefinition;
use crate::function::prompt_function::PromptFunction;
use std::collections::HashMap;
use tracing::debug;

/// Registry for looking up constructed prompt functions
#[derive(Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, PromptFunction>,
}

impl FunctionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function under its qualified name, replacing any
    /// previous registration
    pub fn register(&mut self, function: PromptFunction) {
        let key = function.qualified_name();
        debug!(function = %key, "Registered prompt function");
        self.functions.insert(key, function);
    }

    /// Look up a function by plugin and function name
    pub fn get(&self, plugin_name: &str, function_name: &str) -> Option<&PromptFunction> {
        self.functions
            .get(&format!("{}.{}", plugin_name, function_name))
    }

    /// List all registered qualified names
    pub fn names(&self) -> Vec<&str> {
        self.functions.keys().map(|s| s.as_str()).collect()
    }

    /// Export all function definitions for function-calling APIs
    pub fn definitions(&self) -> Vec<FunctionDefinition> {
        self.functions.values().map(|f| f.definition()).collect()
    }

    /// Number of registered functions
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greeter() -> PromptFunction {
        PromptFunction::from_yaml("template: \"Hello {{name}}\"", "social", "greet").unwrap()
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = FunctionRegistry::new();
        assert!(registry.is_empty());

        registry.register(greeter());
        assert_eq!(registry.len(), 1);

        let function = registry.get("social", "greet").unwrap();
        assert_eq!(function.name(), "greet");
        assert!(registry.get("social", "missing").is_none());
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = FunctionRegistry::new();
        registry.register(greeter());
        registry.register(greeter());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_definitions_export() {
        let mut registry = FunctionRegistry::new();
        registry.register(greeter());

        let definitions = registry.definitions();
        assert_eq!(definitions.len(), 1);
        assert_eq!(definitions[0].name, "social.greet");
    }
}
