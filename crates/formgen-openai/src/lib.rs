//! OpenAI backend for the **formgen** workspace.
//!
//! Implements [`formgen_core::provider::CompletionProvider`] on top of the
//! *chat/completions* endpoint, converting HTTP failures into the classified
//! [`formgen_core::error::CompletionError`] the orchestrator's retry policy
//! expects.

mod adapter;
mod client;
mod model_map;
mod provider_impl;

pub use adapter::{OpenAiAdapter, OpenAiAdapterBuilder};
pub mod api_v1;
pub mod error;
