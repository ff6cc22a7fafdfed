//! Error type of the OpenAI backend and its classification into the
//! provider-agnostic [`CompletionError`].
//!
//! The classification is what drives the orchestrator's retry policy, so it
//! has to be faithful: a `rate_limit_exceeded` code (or a bare 429) is
//! retryable with backoff, `insufficient_quota` is a persistent condition
//! that must not be retried, and 5xx responses look temporary.

use formgen_core::error::CompletionError;
use reqwest::StatusCode;

/// OpenAI error codes that select a retry classification.
pub const CODE_RATE_LIMITED: &str = "rate_limit_exceeded";
pub const CODE_QUOTA_EXCEEDED: &str = "insufficient_quota";

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn't serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("OpenAI returned non-success status {status}: {message}")]
    Api {
        status: StatusCode,
        /// Machine-readable error code from the response envelope, if any.
        code: Option<String>,
        message: String,
    },

    #[error("OpenAI format error: {0}")]
    Format(String),

    #[error("missing env variable: `OPENAI_API_KEY`")]
    MissingApiKey,
}

impl From<OpenAiError> for CompletionError {
    fn from(value: OpenAiError) -> Self {
        match value {
            OpenAiError::Api { status, code, message } => match code.as_deref() {
                Some(CODE_QUOTA_EXCEEDED) => CompletionError::QuotaExceeded,
                Some(CODE_RATE_LIMITED) => CompletionError::RateLimited,
                _ if status == StatusCode::TOO_MANY_REQUESTS => CompletionError::RateLimited,
                _ if status.is_server_error() => {
                    CompletionError::Transient(format!("status {status}: {message}"))
                }
                _ => CompletionError::Backend(Box::new(OpenAiError::Api {
                    status,
                    code,
                    message,
                })),
            },
            OpenAiError::Http(err) if err.is_timeout() || err.is_connect() => {
                CompletionError::Transient(err.to_string())
            }
            other => CompletionError::Backend(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: StatusCode, code: Option<&str>) -> OpenAiError {
        OpenAiError::Api {
            status,
            code: code.map(str::to_owned),
            message: "boom".into(),
        }
    }

    #[test]
    fn rate_limit_code_classifies_as_rate_limited() {
        let classified: CompletionError =
            api(StatusCode::TOO_MANY_REQUESTS, Some(CODE_RATE_LIMITED)).into();
        assert!(matches!(classified, CompletionError::RateLimited));
    }

    #[test]
    fn quota_code_wins_over_the_429_status() {
        let classified: CompletionError =
            api(StatusCode::TOO_MANY_REQUESTS, Some(CODE_QUOTA_EXCEEDED)).into();
        assert!(matches!(classified, CompletionError::QuotaExceeded));
    }

    #[test]
    fn bare_429_is_still_rate_limited() {
        let classified: CompletionError = api(StatusCode::TOO_MANY_REQUESTS, None).into();
        assert!(matches!(classified, CompletionError::RateLimited));
    }

    #[test]
    fn server_errors_are_transient() {
        let classified: CompletionError = api(StatusCode::BAD_GATEWAY, None).into();
        assert!(matches!(classified, CompletionError::Transient(_)));
    }

    #[test]
    fn everything_else_is_a_backend_error() {
        let classified: CompletionError = api(StatusCode::BAD_REQUEST, None).into();
        assert!(matches!(classified, CompletionError::Backend(_)));

        let classified: CompletionError = OpenAiError::Format("no choices".into()).into();
        assert!(matches!(classified, CompletionError::Backend(_)));
    }
}
