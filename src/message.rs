//! Message types for chat completions.

use serde::{Deserialize, Serialize};

/// Role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System message providing instructions.
    System,
    /// User message.
    User,
    /// Assistant (model) message.
    Assistant,
}

impl Role {
    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single message in a conversation.
///
/// Serializes as `{"role": ..., "content": ...}` per the chat completions
/// wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who authored the message.
    pub role: Role,
    /// The text content.
    pub content: String,
}

impl Message {
    /// Creates a new message with the given role and content.
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Creates a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Creates an assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod role {
        use super::*;

        #[test]
        fn as_str_all_variants() {
            assert_eq!(Role::System.as_str(), "system");
            assert_eq!(Role::User.as_str(), "user");
            assert_eq!(Role::Assistant.as_str(), "assistant");
        }

        #[test]
        fn display_matches_as_str() {
            for role in [Role::System, Role::User, Role::Assistant] {
                assert_eq!(role.to_string(), role.as_str());
            }
        }

        #[test]
        fn serde_uses_lowercase() {
            let json = serde_json::to_string(&Role::Assistant).unwrap();
            assert_eq!(json, r#""assistant""#);
        }

        #[test]
        fn serde_roundtrip() {
            for role in [Role::System, Role::User, Role::Assistant] {
                let json = serde_json::to_string(&role).unwrap();
                let parsed: Role = serde_json::from_str(&json).unwrap();
                assert_eq!(parsed, role);
            }
        }
    }

    mod message {
        use super::*;

        #[test]
        fn constructors_set_role() {
            assert_eq!(Message::system("a").role, Role::System);
            assert_eq!(Message::user("b").role, Role::User);
            assert_eq!(Message::assistant("c").role, Role::Assistant);
        }

        #[test]
        fn new_sets_content() {
            let msg = Message::new(Role::User, "Hello");
            assert_eq!(msg.content, "Hello");
        }

        #[test]
        fn serde_matches_wire_format() {
            let msg = Message::user("Hello!");
            let json = serde_json::to_value(&msg).unwrap();
            assert_eq!(json["role"], "user");
            assert_eq!(json["content"], "Hello!");
        }

        #[test]
        fn deserializes_assistant_reply() {
            let json = r#"{"role": "assistant", "content": "Hi there."}"#;
            let msg: Message = serde_json::from_str(json).unwrap();
            assert_eq!(msg.role, Role::Assistant);
            assert_eq!(msg.content, "Hi there.");
        }
    }
}
