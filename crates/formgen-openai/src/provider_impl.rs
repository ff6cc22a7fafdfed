use std::{future::Future, pin::Pin, sync::Arc};

use formgen_core::{
    error::CompletionError,
    provider::{CompletionProvider, CompletionRequest},
};
use tracing::debug;

use crate::{
    OpenAiAdapter, api_v1::ChatCompletionRequest, error::OpenAiError, model_map::map_model,
};

impl CompletionProvider for OpenAiAdapter {
    fn complete<'p>(
        &'p self,
        request: CompletionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, CompletionError>> + Send + 'p>> {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let model = map_model(&request.model);
            let messages = request.messages.into_iter().map(Into::into).collect();

            // The original service pins both penalties to zero to favour
            // deterministic JSON output.
            let mut api_request = ChatCompletionRequest::new(model.to_string(), messages)
                .presence_penalty(0.0)
                .frequency_penalty(0.0);
            if let Some(temperature) = request.temperature {
                api_request = api_request.temperature(temperature);
            }
            if let Some(max_tokens) = request.max_tokens {
                api_request = api_request.max_tokens(max_tokens);
            }

            let mut response = client
                .chat_completion(api_request)
                .await
                .map_err(CompletionError::from)?;

            if let Some(usage) = response.usage {
                debug!(
                    prompt_tokens = usage.prompt_tokens,
                    completion_tokens = usage.completion_tokens,
                    "chat completion finished"
                );
            }

            let Some(choice) = response.choices.pop() else {
                return Err(OpenAiError::Format("response has no choices".into()).into());
            };

            match choice.message.content {
                Some(text) if !text.trim().is_empty() => Ok(text),
                _ => Err(OpenAiError::Format("response has no content".into()).into()),
            }
        })
    }
}
