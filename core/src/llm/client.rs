//! Completion client trait and response structures

use crate::config::ExecutionSettings;
use crate::error::{CompletionError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::message::PromptMessage;

/// Trait for completion backends
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a completion request
    async fn complete(
        &self,
        messages: Vec<PromptMessage>,
        options: CompletionOptions,
    ) -> Result<CompletionResponse>;

    /// Get the model name
    fn model_name(&self) -> &str;

    /// Check if the client supports streaming
    fn supports_streaming(&self) -> bool {
        false
    }

    /// Send a streaming completion request
    async fn complete_stream(
        &self,
        _messages: Vec<PromptMessage>,
        _options: CompletionOptions,
    ) -> Result<Box<dyn futures::Stream<Item = Result<CompletionChunk>> + Send + Unpin + '_>> {
        Err(CompletionError::StreamingUnsupported.into())
    }
}

/// Response from a completion backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// The generated message
    pub message: PromptMessage,

    /// Model used for generation
    pub model: String,

    /// Usage statistics
    pub usage: Option<Usage>,

    /// Finish reason
    pub finish_reason: Option<FinishReason>,
}

/// Streaming chunk from a completion backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionChunk {
    /// Delta content
    pub delta: Option<String>,

    /// Finish reason if this is the last chunk
    pub finish_reason: Option<FinishReason>,

    /// Usage statistics (usually only in the last chunk)
    pub usage: Option<Usage>,
}

/// Usage statistics for a request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,

    /// Number of tokens in the completion
    pub completion_tokens: u32,

    /// Total number of tokens
    pub total_tokens: u32,
}

/// Reason why generation finished
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Generation completed naturally
    Stop,

    /// Hit the maximum token limit
    Length,

    /// Content was filtered
    ContentFilter,

    /// Other reason
    Other(String),
}

/// Options for a completion request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionOptions {
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,

    /// Temperature for generation
    pub temperature: Option<f32>,

    /// Top-p sampling parameter
    pub top_p: Option<f32>,

    /// Top-k sampling parameter
    pub top_k: Option<u32>,

    /// Stop sequences
    pub stop: Option<Vec<String>>,

    /// Whether to stream the response
    pub stream: bool,
}

impl From<&ExecutionSettings> for CompletionOptions {
    fn from(settings: &ExecutionSettings) -> Self {
        Self {
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            top_p: settings.top_p,
            top_k: settings.top_k,
            stop: settings.stop_sequences.clone(),
            stream: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_from_execution_settings() {
        let settings = ExecutionSettings {
            max_tokens: Some(256),
            temperature: Some(0.5),
            top_p: Some(0.9),
            top_k: None,
            stop_sequences: Some(vec!["END".to_string()]),
        };

        let options = CompletionOptions::from(&settings);
        assert_eq!(options.max_tokens, Some(256));
        assert_eq!(options.temperature, Some(0.5));
        assert_eq!(options.top_p, Some(0.9));
        assert_eq!(options.stop.as_deref(), Some(&["END".to_string()][..]));
        assert!(!options.stream);
    }

    struct NoStreamClient;

    #[async_trait]
    impl CompletionClient for NoStreamClient {
        async fn complete(
            &self,
            _messages: Vec<PromptMessage>,
            _options: CompletionOptions,
        ) -> Result<CompletionResponse> {
            Ok(CompletionResponse {
                message: PromptMessage::assistant("ok"),
                model: "test".to_string(),
                usage: None,
                finish_reason: Some(FinishReason::Stop),
            })
        }

        fn model_name(&self) -> &str {
            "test"
        }
    }

    #[tokio::test]
    async fn test_default_streaming_is_unsupported() {
        let client = NoStreamClient;
        assert!(!client.supports_streaming());

        let err = client
            .complete_stream(vec![], CompletionOptions::default())
            .await
            .err()
            .expect("expected error");
        assert!(err.to_string().contains("Streaming not supported"));
    }
}
