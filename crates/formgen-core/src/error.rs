//! Error types exposed by **`formgen-core`**.
//!
//! Backend crates convert their transport errors into [`CompletionError`]
//! before they cross the provider boundary; the orchestrator reclassifies
//! those into the caller-facing [`GenerateError`]. This keeps the public
//! failure surface to five well-known kinds while still carrying a
//! diagnostic payload where one exists.

use thiserror::Error;

/// Convenient alias for the caller-facing result of a generation run.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Caller-facing failure taxonomy of the generation pipeline.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The user prompt was empty or whitespace-only. Caller error, never
    /// retried.
    #[error("a non-empty prompt is required")]
    InvalidInput,

    /// The completion service rate-limited every attempt within the retry
    /// budget.
    #[error("rate limit exceeded, please try again in a moment")]
    RateLimited,

    /// The completion service reported an exhausted quota. Persistent
    /// condition, never retried.
    #[error("completion service quota exceeded")]
    QuotaExceeded,

    /// The completion service failed on the final attempt for a reason other
    /// than rate limiting or quota.
    #[error("completion service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The model replied, but its text could not be coerced into a valid
    /// schema. Carries either the parse diagnostic or the joined validator
    /// error list.
    #[error("generated schema was unusable: {0}")]
    GenerationFailed(String),
}

/// Failure of the sanitize-then-decode stage.
///
/// Keeps the original raw model text so the caller can log it next to the
/// decode message.
#[derive(Debug, Error)]
#[error("failed to parse model response as JSON: {message}")]
pub struct ParseError {
    /// The underlying JSON decode message.
    pub message: String,
    /// The unmodified model output, for diagnostics.
    pub raw: String,
}

/// Classified failure returned by a [`crate::provider::CompletionProvider`].
///
/// The classification drives the orchestrator's retry policy: rate limits are
/// retried with backoff, quota exhaustion is terminal, everything else is
/// retried without a wait until the attempt budget runs out.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("rate limited by the completion service")]
    RateLimited,

    #[error("completion service quota exhausted")]
    QuotaExceeded,

    /// A failure that looks temporary (5xx, connection reset, …).
    #[error("transient completion failure: {0}")]
    Transient(String),

    /// Any backend-specific error that doesn't fit another category.
    #[error("completion backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}
