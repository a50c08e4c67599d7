//! Token usage statistics.

use serde::{Deserialize, Serialize};

/// Token usage reported for a chat completion.
///
/// Field names match the wire format (`prompt_tokens`, `completion_tokens`,
/// `total_tokens`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Tokens consumed by the prompt.
    #[serde(default)]
    pub prompt_tokens: u32,
    /// Tokens generated in the completion.
    #[serde(default)]
    pub completion_tokens: u32,
    /// Total tokens used.
    #[serde(default)]
    pub total_tokens: u32,
}

impl Usage {
    /// Creates a new usage record; the total is derived.
    #[must_use]
    pub const fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }

    /// Returns `true` if no tokens were counted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_tokens == 0
    }
}

impl std::fmt::Display for Usage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Usage(prompt: {}, completion: {}, total: {})",
            self.prompt_tokens, self.completion_tokens, self.total_tokens
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_derives_total() {
        let usage = Usage::new(100, 50);
        assert_eq!(usage.prompt_tokens, 100);
        assert_eq!(usage.completion_tokens, 50);
        assert_eq!(usage.total_tokens, 150);
    }

    #[test]
    fn default_is_empty() {
        assert!(Usage::default().is_empty());
        assert!(!Usage::new(1, 0).is_empty());
    }

    #[test]
    fn deserializes_wire_format() {
        let json = r#"{"prompt_tokens": 12, "completion_tokens": 34, "total_tokens": 46}"#;
        let usage: Usage = serde_json::from_str(json).unwrap();
        assert_eq!(usage.prompt_tokens, 12);
        assert_eq!(usage.completion_tokens, 34);
        assert_eq!(usage.total_tokens, 46);
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let usage: Usage = serde_json::from_str("{}").unwrap();
        assert!(usage.is_empty());
    }

    #[test]
    fn display_contains_counts() {
        let display = Usage::new(100, 50).to_string();
        assert!(display.contains("100"));
        assert!(display.contains("50"));
        assert!(display.contains("150"));
    }
}
