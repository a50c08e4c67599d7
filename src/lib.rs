//! Rust client for the Venice.ai chat completions API.
//!
//! This crate provides a small client for the OpenAI-compatible
//! `/chat/completions` endpoint exposed by Venice.ai, supporting both
//! one-shot and streaming requests. The streaming path decodes the
//! `text/event-stream` response body incrementally, yielding text deltas
//! as they arrive.
//!
//! # Example
//!
//! ```rust,ignore
//! use venice::prelude::*;
//!
//! let client = Venice::from_env()?;
//!
//! let request = ChatRequest::new(client.model())
//!     .user("What is the capital of France?")
//!     .temperature(0.7);
//!
//! let response = client.chat(&request).await?;
//! println!("{}", response.text().unwrap_or_default());
//! ```

pub mod chat;
pub mod client;
pub mod config;
pub mod error;
pub mod message;
pub mod prelude;
pub mod sse;
pub mod stream;
pub mod usage;

pub use error::{Error, LlmError, Result};
