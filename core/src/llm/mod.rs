//! Completion backend abstractions
//!
//! Backends are external collaborators; this module only defines the
//! seam they plug into.

pub mod client;
pub mod message;

pub use client::{
    CompletionChunk, CompletionClient, CompletionOptions, CompletionResponse, FinishReason, Usage,
};
pub use message::{MessageRole, PromptMessage};
