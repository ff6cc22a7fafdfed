//! Provider abstraction over the external completion service.
//!
//! The pipeline treats the LLM as an opaque text-completion endpoint: a
//! message pair goes out, raw text (or a classified failure) comes back.
//! Backends convert their transport errors into
//! [`CompletionError`](crate::error::CompletionError) before crossing this
//! boundary, so the orchestrator's retry policy only ever sees the
//! classification, never a raw transport error.
//!
//! The trait returns a [`Pin<Box<dyn Future>>`] so it stays object-safe
//! without pulling in `async_trait`.

use std::{future::Future, pin::Pin};

use serde::{Deserialize, Serialize};

use crate::error::CompletionError;
use crate::model::Model;

/// One chat message of the outbound prompt pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Chat roles recognised by the completion service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A bounded completion request: messages plus generation parameters.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,
    pub model: Model,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    pub fn new(messages: Vec<Message>, model: Model) -> Self {
        Self {
            messages,
            model,
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// A backend that turns a [`CompletionRequest`] into a network call to a
/// concrete provider and returns the model's raw text reply.
///
/// Implementations must be stateless across calls (shared connection pools
/// aside) so concurrent generation runs stay independent.
pub trait CompletionProvider: Send + Sync {
    /// Execute a single non-streaming completion round-trip.
    fn complete<'p>(
        &'p self,
        request: CompletionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, CompletionError>> + Send + 'p>>;
}
