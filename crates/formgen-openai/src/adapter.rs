use std::{env, sync::Arc};

use crate::{client::OpenAiClient, error::OpenAiError};

/// Thin wrapper that wires the HTTP client [`OpenAiClient`] into a value that
/// implements [`formgen_core::provider::CompletionProvider`].
///
/// The adapter holds no per-request state—credentials and the connection
/// pool only—so a single instance can serve concurrent generation runs.
#[derive(Debug)]
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
}

/// Builder for [`OpenAiAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use formgen_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new_from_env()
///     .build()
///     .expect("OPENAI_API_KEY must be set");
/// ```
///
/// The credential is read here, at construction time, never at module
/// scope—callers that want a fake backend simply skip this builder.
#[derive(Default)]
pub struct OpenAiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
}

impl OpenAiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that tries to load the `OPENAI_API_KEY`
    /// environment variable.
    ///
    /// Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var("OPENAI_API_KEY").ok(),
            base_url: None,
        }
    }

    /// Supply the API key explicitly.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the client at a non-default endpoint (self-hosted gateway,
    /// test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`OpenAiError::MissingApiKey`] – if no API key was supplied.
    pub fn build(self) -> Result<OpenAiAdapter, OpenAiError> {
        let api_key = self.api_key.ok_or(OpenAiError::MissingApiKey)?;

        let client = match self.base_url {
            Some(base) => {
                let http = reqwest::Client::builder()
                    .timeout(std::time::Duration::from_secs(30))
                    .build()?;
                OpenAiClient::with_http(api_key, http, Some(base))
            }
            None => OpenAiClient::new(api_key)?,
        };

        Ok(OpenAiAdapter {
            client: Arc::new(client),
        })
    }
}
