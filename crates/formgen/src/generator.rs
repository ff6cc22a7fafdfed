//! The completion orchestrator: one prompt in, one validated schema out.
//!
//! [`FormGenerator`] drives the whole pipeline—prompt pair, bounded retry
//! against the completion backend, then parse → validate → enrich—and maps
//! every failure onto the five caller-facing
//! [`GenerateError`](formgen_core::error::GenerateError) kinds.
//!
//! The generator is stateless across calls: it owns an `Arc` of the backend
//! and nothing else, so concurrent `generate` calls are independent. The
//! retry delay is injected via [`Sleeper`] so the backoff contract can be
//! tested without real sleeps.

use std::{future::Future, pin::Pin, sync::Arc, time::Duration};

use formgen_core::{
    enrich::enrich,
    error::{CompletionError, GenerateError, Result},
    model::{Model, OpenAiModel},
    parse::parse_candidate,
    provider::{CompletionProvider, CompletionRequest, Message},
    schema::FormSchema,
    validate::validate,
};
use formgen_prompt::form_prompt;
use tracing::{debug, warn};

/// Total attempts against the completion service, including the first.
const MAX_ATTEMPTS: u32 = 3;
/// Linear backoff step: the n-th rate-limited attempt waits `n * STEP`.
const BACKOFF_STEP: Duration = Duration::from_millis(1000);
/// Low temperature favouring deterministic JSON output.
const TEMPERATURE: f64 = 0.3;
/// Generation ceiling; generous for a form schema.
const MAX_TOKENS: u32 = 2000;

/// Delay capability used between rate-limited attempts.
pub trait Sleeper: Send + Sync {
    fn sleep<'s>(&'s self, duration: Duration)
    -> Pin<Box<dyn Future<Output = ()> + Send + 's>>;
}

/// Default [`Sleeper`] backed by `tokio::time::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep<'s>(
        &'s self,
        duration: Duration,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 's>> {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// Orchestrates a single prompt → schema generation run.
///
/// Generic over the backend `B`, so tests can plug in a scripted fake and
/// production code an [`OpenAiAdapter`](formgen_openai::OpenAiAdapter).
#[derive(Debug, Clone)]
pub struct FormGenerator<B, S = TokioSleeper> {
    backend: Arc<B>,
    sleeper: S,
    model: Model,
}

impl<B: CompletionProvider> FormGenerator<B> {
    /// Create a generator targeting the default model (`gpt-4`).
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
            sleeper: TokioSleeper,
            model: Model::OpenAi(OpenAiModel::Gpt4),
        }
    }
}

impl<B, S> FormGenerator<B, S>
where
    B: CompletionProvider,
    S: Sleeper,
{
    /// Target a different completion model.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Replace the delay capability (tests use a recording fake).
    pub fn with_sleeper<S2: Sleeper>(self, sleeper: S2) -> FormGenerator<B, S2> {
        FormGenerator {
            backend: self.backend,
            sleeper,
            model: self.model,
        }
    }

    /// Generate a validated, enriched form schema from a natural-language
    /// description.
    pub async fn generate(&self, description: &str) -> Result<FormSchema> {
        let description = description.trim();
        if description.is_empty() {
            return Err(GenerateError::InvalidInput);
        }

        let request = CompletionRequest::new(
            vec![
                Message::system(form_prompt::system_prompt()),
                Message::user(form_prompt::user_prompt(description)),
            ],
            self.model.clone(),
        )
        .with_temperature(TEMPERATURE)
        .with_max_tokens(MAX_TOKENS);

        let raw = self.complete_with_retry(request).await?;

        let candidate = parse_candidate(&raw).map_err(|err| {
            warn!(raw = %err.raw, "model response could not be parsed as JSON");
            GenerateError::GenerationFailed(err.to_string())
        })?;

        let report = validate(&candidate);
        if !report.is_valid() {
            let errors = report.join_errors();
            warn!(%errors, "generated schema failed validation");
            return Err(GenerateError::GenerationFailed(errors));
        }

        // Validation guarantees the coarse structure, but the typed model is
        // stricter about attribute value types (e.g. maxStars must be an
        // integer), so this conversion can still reject the candidate.
        let schema: FormSchema = serde_json::from_value(candidate).map_err(|err| {
            warn!(error = %err, "validated candidate did not match the schema shape");
            GenerateError::GenerationFailed(format!(
                "schema did not match the expected shape: {err}"
            ))
        })?;

        Ok(enrich(schema))
    }

    /// Call the backend with the bounded retry policy.
    ///
    /// Rate limits wait `attempt * 1s` and retry; quota exhaustion is
    /// terminal; anything else retries without a wait and surfaces as
    /// `ServiceUnavailable` on the final attempt.
    async fn complete_with_retry(&self, request: CompletionRequest) -> Result<String> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.backend.complete(request.clone()).await {
                Ok(text) => return Ok(text),
                Err(CompletionError::QuotaExceeded) => return Err(GenerateError::QuotaExceeded),
                Err(CompletionError::RateLimited) => {
                    if attempt >= MAX_ATTEMPTS {
                        return Err(GenerateError::RateLimited);
                    }
                    let wait = BACKOFF_STEP * attempt;
                    debug!(attempt, wait_ms = wait.as_millis() as u64, "rate limited, backing off");
                    self.sleeper.sleep(wait).await;
                }
                Err(err) => {
                    if attempt >= MAX_ATTEMPTS {
                        return Err(GenerateError::ServiceUnavailable(err.to_string()));
                    }
                    debug!(attempt, error = %err, "completion attempt failed, retrying");
                }
            }
        }
    }
}
