//! Model identifiers used throughout the **formgen** workspace.
//!
//! Application code picks an enum variant instead of typing literal strings
//! such as `"gpt-4"`; the backend crate maps the variant onto its own naming
//! scheme. Adding a model means adding the variant here and extending the
//! mapping function in the provider crate—the compiler points at every match
//! that needs updating.

/// Universal identifier for a completion model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Built-in OpenAI chat models.
    OpenAi(OpenAiModel),
    /// Any provider/model name not covered by a dedicated enum, e.g. a
    /// self-hosted gateway model.
    Custom(&'static str),
}

/// Chat models officially supported by the OpenAI backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenAiModel {
    Gpt4,
    Gpt4o,
    Gpt4oMini,
}

impl From<OpenAiModel> for Model {
    fn from(val: OpenAiModel) -> Self {
        Model::OpenAi(val)
    }
}
