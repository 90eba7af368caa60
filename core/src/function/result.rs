//! Result of a prompt function invocation

use crate::llm::Usage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// The outcome of one completed invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionResult {
    /// Unique identifier for this invocation
    pub invocation_id: String,

    /// The completion text
    pub content: String,

    /// Model that produced the completion
    pub model: String,

    /// Usage statistics reported by the backend
    pub usage: Option<Usage>,

    /// When the result was produced
    pub created_at: DateTime<Utc>,

    /// Optional metadata
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

impl FunctionResult {
    /// Create a new result with a fresh invocation id
    pub fn new<C: Into<String>, M: Into<String>>(content: C, model: M) -> Self {
        Self {
            invocation_id: Uuid::new_v4().to_string(),
            content: content.into(),
            model: model.into(),
            usage: None,
            created_at: Utc::now(),
            metadata: None,
        }
    }

    /// Set usage statistics
    pub fn with_usage(mut self, usage: Option<Usage>) -> Self {
        self.usage = usage;
        self
    }

    /// Set metadata
    pub fn with_metadata(mut self, metadata: HashMap<String, serde_json::Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_unique_invocation_ids() {
        let a = FunctionResult::new("one", "m");
        let b = FunctionResult::new("two", "m");
        assert_ne!(a.invocation_id, b.invocation_id);
        assert_eq!(a.content, "one");
        assert_eq!(a.model, "m");
        assert!(a.usage.is_none());
    }

    #[test]
    fn test_new_accepts_mixed_argument_types() {
        let content = String::from("rendered output");
        let result = FunctionResult::new(content, "echo-1");
        assert_eq!(result.content, "rendered output");
        assert_eq!(result.model, "echo-1");
    }

    #[test]
    fn test_with_usage() {
        let usage = Usage {
            prompt_tokens: 10,
            completion_tokens: 5,
            total_tokens: 15,
        };
        let result = FunctionResult::new("x", "m").with_usage(Some(usage));
        assert_eq!(result.usage.unwrap().total_tokens, 15);
    }
}
