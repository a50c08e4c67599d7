//! Chat request and response types.
//!
//! [`ChatRequest`] serializes directly as the JSON body of a
//! `/chat/completions` call; unset optional fields are omitted, and the
//! `stream` flag is omitted when false.
//!
//! # Example
//!
//! ```rust,ignore
//! let request = ChatRequest::new("venice-uncensored")
//!     .system("You are a helpful assistant.")
//!     .user("Hello!")
//!     .temperature(0.7)
//!     .max_completion_tokens(100);
//! ```

use serde::{Deserialize, Serialize};

use crate::message::Message;
use crate::usage::Usage;

/// A chat completion request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model identifier. When empty, the client substitutes its configured
    /// default model.
    #[serde(default)]
    pub model: String,

    /// Conversation messages, in order.
    #[serde(default)]
    pub messages: Vec<Message>,

    /// Sampling temperature (0.0 to 2.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    /// Maximum tokens to generate for the completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_completion_tokens: Option<u32>,

    /// Whether to stream the response.
    #[serde(default, skip_serializing_if = "is_false")]
    pub stream: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl ChatRequest {
    /// Creates a new request for the specified model.
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Creates a request with messages.
    #[must_use]
    pub fn with_messages(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            ..Default::default()
        }
    }

    /// Adds a system message.
    #[must_use]
    pub fn system(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::system(content));
        self
    }

    /// Adds a user message.
    #[must_use]
    pub fn user(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::user(content));
        self
    }

    /// Adds an assistant message.
    #[must_use]
    pub fn assistant(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::assistant(content));
        self
    }

    /// Adds a message.
    #[must_use]
    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Sets temperature.
    #[must_use]
    pub const fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets top-p.
    #[must_use]
    pub const fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Sets the maximum completion tokens.
    #[must_use]
    pub const fn max_completion_tokens(mut self, tokens: u32) -> Self {
        self.max_completion_tokens = Some(tokens);
        self
    }

    /// Enables streaming.
    #[must_use]
    pub const fn stream(mut self) -> Self {
        self.stream = true;
        self
    }
}

/// A chat completion response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Unique completion ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Model that produced the response.
    #[serde(default)]
    pub model: String,

    /// Generated choices, in order.
    #[serde(default)]
    pub choices: Vec<Choice>,

    /// Token usage statistics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Returns the text content of the first choice.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

/// A single generated choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    /// Index of this choice in the response.
    #[serde(default)]
    pub index: u32,

    /// The generated message.
    pub message: Message,

    /// Why the model stopped generating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::message::Role;

    mod chat_request {
        use super::*;

        #[test]
        fn new_creates_with_model() {
            let req = ChatRequest::new("venice-uncensored");
            assert_eq!(req.model, "venice-uncensored");
            assert!(req.messages.is_empty());
            assert!(!req.stream);
        }

        #[test]
        fn with_messages_sets_both() {
            let req = ChatRequest::with_messages("venice-uncensored", vec![Message::user("Hi")]);
            assert_eq!(req.messages.len(), 1);
        }

        #[test]
        fn builder_chain() {
            let req = ChatRequest::new("venice-uncensored")
                .system("Be helpful")
                .user("Hello")
                .temperature(0.7)
                .max_completion_tokens(100);

            assert_eq!(req.messages.len(), 2);
            assert_eq!(req.temperature, Some(0.7));
            assert_eq!(req.max_completion_tokens, Some(100));
        }

        #[test]
        fn messages_keep_supplied_order() {
            let req = ChatRequest::new("venice-uncensored")
                .system("first")
                .user("second")
                .assistant("third")
                .user("fourth");

            let roles: Vec<Role> = req.messages.iter().map(|m| m.role).collect();
            assert_eq!(
                roles,
                [Role::System, Role::User, Role::Assistant, Role::User]
            );

            let json = serde_json::to_value(&req).unwrap();
            let contents: Vec<&str> = json["messages"]
                .as_array()
                .unwrap()
                .iter()
                .map(|m| m["content"].as_str().unwrap())
                .collect();
            assert_eq!(contents, ["first", "second", "third", "fourth"]);
        }

        #[test]
        fn serde_omits_unset_optionals() {
            let req = ChatRequest::new("venice-uncensored").user("Hello");
            let json = serde_json::to_string(&req).unwrap();

            assert!(json.contains("model"));
            assert!(json.contains("messages"));
            assert!(!json.contains("max_completion_tokens"));
            assert!(!json.contains("temperature"));
            assert!(!json.contains("top_p"));
        }

        #[test]
        fn serde_omits_stream_when_false() {
            let req = ChatRequest::new("venice-uncensored").user("Hello");
            let json = serde_json::to_string(&req).unwrap();
            assert!(!json.contains("stream"));
        }

        #[test]
        fn serde_includes_stream_when_true() {
            let req = ChatRequest::new("venice-uncensored").user("Hello").stream();
            let json = serde_json::to_value(&req).unwrap();
            assert_eq!(json["stream"], true);
        }

        #[test]
        fn serde_includes_set_optionals() {
            let req = ChatRequest::new("venice-uncensored")
                .temperature(0.8)
                .max_completion_tokens(100);
            let json = serde_json::to_value(&req).unwrap();
            assert_eq!(json["temperature"], 0.8);
            assert_eq!(json["max_completion_tokens"], 100);
        }

        #[test]
        fn serde_roundtrip() {
            let req = ChatRequest::new("venice-uncensored")
                .user("Hello")
                .temperature(0.7);
            let json = serde_json::to_string(&req).unwrap();
            let parsed: ChatRequest = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed.model, req.model);
            assert_eq!(parsed.temperature, req.temperature);
            assert!(!parsed.stream);
        }
    }

    mod chat_response {
        use super::*;

        const RESPONSE_JSON: &str = r#"{
            "id": "chatcmpl-123",
            "model": "venice-uncensored",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": "Venice API is working!"},
                    "finish_reason": "stop"
                }
            ],
            "usage": {"prompt_tokens": 21, "completion_tokens": 7, "total_tokens": 28}
        }"#;

        #[test]
        fn parses_wire_format() {
            let resp: ChatResponse = serde_json::from_str(RESPONSE_JSON).unwrap();
            assert_eq!(resp.model, "venice-uncensored");
            assert_eq!(resp.id.as_deref(), Some("chatcmpl-123"));
            assert_eq!(resp.choices.len(), 1);
            assert_eq!(resp.choices[0].finish_reason.as_deref(), Some("stop"));

            let usage = resp.usage.unwrap();
            assert_eq!(usage.prompt_tokens, 21);
            assert_eq!(usage.completion_tokens, 7);
            assert_eq!(usage.total_tokens, 28);
        }

        #[test]
        fn text_returns_first_choice_content() {
            let resp: ChatResponse = serde_json::from_str(RESPONSE_JSON).unwrap();
            assert_eq!(resp.text(), Some("Venice API is working!"));
        }

        #[test]
        fn text_returns_none_without_choices() {
            let resp: ChatResponse = serde_json::from_str(r#"{"model": "m"}"#).unwrap();
            assert!(resp.text().is_none());
            assert!(resp.usage.is_none());
        }
    }
}
