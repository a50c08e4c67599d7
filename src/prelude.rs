//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```rust,ignore
//! use venice::prelude::*;
//! ```

pub use crate::chat::{ChatRequest, ChatResponse, Choice};
pub use crate::client::Venice;
pub use crate::config::VeniceConfig;
pub use crate::error::{Error, LlmError, Result};
pub use crate::message::{Message, Role};
pub use crate::sse::{ChatStream, SseDecoder};
pub use crate::stream::StreamEvent;
pub use crate::usage::Usage;
