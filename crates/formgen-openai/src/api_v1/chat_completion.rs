use formgen_core::provider::{Message, MessageRole};
use serde::{Deserialize, Serialize};

use crate::impl_builder_methods;

use super::Usage;

#[derive(Debug, Serialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
}

impl ChatCompletionRequest {
    pub fn new(model: String, messages: Vec<ChatCompletionMessage>) -> Self {
        Self {
            model,
            messages,
            temperature: None,
            max_tokens: None,
            presence_penalty: None,
            frequency_penalty: None,
        }
    }
}

impl_builder_methods!(
    ChatCompletionRequest,
    temperature: f64,
    max_tokens: u32,
    presence_penalty: f64,
    frequency_penalty: f64
);

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChatCompletionMessage {
    pub role: ChatRole,
    pub content: String,
}

impl From<Message> for ChatCompletionMessage {
    fn from(value: Message) -> Self {
        Self {
            role: match value.role {
                MessageRole::System => ChatRole::System,
                MessageRole::User => ChatRole::User,
                MessageRole::Assistant => ChatRole::Assistant,
            },
            content: value.content,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponseMessage {
    pub role: ChatRole,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionChoice {
    pub index: i64,
    pub message: ChatCompletionResponseMessage,
    pub finish_reason: Option<FinishReason>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: Option<String>,
    pub model: String,
    pub choices: Vec<ChatCompletionChoice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_omits_unset_generation_parameters() {
        let request = ChatCompletionRequest::new("gpt-4".into(), vec![]);
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("temperature").is_none());
        assert!(value.get("max_tokens").is_none());

        let request = request.temperature(0.3).max_tokens(2000);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["temperature"], 0.3);
        assert_eq!(value["max_tokens"], 2000);
    }

    #[test]
    fn response_decodes_the_usual_shape() {
        let body = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1,
            "model": "gpt-4",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "{}" },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 10, "completion_tokens": 2, "total_tokens": 12 }
        }"#;
        let response: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].message.content.as_deref(), Some("{}"));
        assert_eq!(response.choices[0].finish_reason, Some(FinishReason::Stop));
    }
}
