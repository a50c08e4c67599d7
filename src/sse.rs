//! Server-sent-event decoding for streaming chat completions.
//!
//! The response body of a streaming request arrives as raw byte chunks that
//! may split event records at arbitrary points. [`SseDecoder`] is an
//! explicit state object holding the partial line carried over between
//! chunks, so that re-chunking the same bytes always yields the same event
//! sequence and the decoding logic can be tested without a network.
//! [`ChatStream`] wraps the decoder around the HTTP byte stream as a
//! [`futures::Stream`] of [`StreamEvent`]s.

use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures::Stream;
use serde::Deserialize;

use crate::error::{LlmError, Result};
use crate::stream::StreamEvent;

/// Prefix marking an SSE payload line.
const DATA_PREFIX: &str = "data: ";
/// Sentinel payload marking explicit end-of-stream.
const DONE_SENTINEL: &str = "[DONE]";

/// Boxed byte stream as produced by the HTTP layer.
pub type ByteStream = Pin<Box<dyn Stream<Item = reqwest::Result<Bytes>> + Send>>;

/// Wire format of one streaming chunk payload.
#[derive(Debug, Deserialize)]
struct ChatCompletionChunk {
    #[serde(default)]
    choices: Vec<ChunkChoice>,
}

#[derive(Debug, Deserialize)]
struct ChunkChoice {
    delta: ChunkDelta,
}

#[derive(Debug, Deserialize)]
struct ChunkDelta {
    content: Option<String>,
}

/// Incremental decoder for a `text/event-stream` response body.
///
/// Invariant: the carry-over buffer never contains a line terminator; every
/// complete line extracted from (carry-over + chunk) is processed exactly
/// once. After the `[DONE]` sentinel, all further input is ignored.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: String,
    done: bool,
}

impl SseDecoder {
    /// Creates a new decoder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once the `[DONE]` sentinel has been seen.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Feeds one chunk of response text, returning the events it completes.
    pub fn feed(&mut self, chunk: &str) -> Vec<StreamEvent> {
        if self.done {
            return Vec::new();
        }
        self.buffer.push_str(chunk);

        let mut events = Vec::new();
        while let Some(newline) = self.buffer.find('\n') {
            let line: String = self.buffer.drain(..=newline).collect();
            if let Some(event) = Self::parse_line(&line) {
                let done = event.is_done();
                events.push(event);
                if done {
                    self.done = true;
                    self.buffer.clear();
                    break;
                }
            }
        }
        events
    }

    /// Flushes the decoder when the underlying stream closes.
    ///
    /// A final record may arrive without a trailing newline.
    pub fn finish(&mut self) -> Vec<StreamEvent> {
        if self.done || self.buffer.is_empty() {
            return Vec::new();
        }
        let rest = std::mem::take(&mut self.buffer);
        let mut events = Vec::new();
        if let Some(event) = Self::parse_line(&rest) {
            if event.is_done() {
                self.done = true;
            }
            events.push(event);
        }
        events
    }

    /// Parses a single line, returning an event for `data: ` payloads.
    ///
    /// Blank lines, comments, and other fields are ignored. Unparsable
    /// payloads and empty deltas are skipped.
    fn parse_line(line: &str) -> Option<StreamEvent> {
        let line = line.trim();
        if line.is_empty() || line.starts_with(':') {
            return None;
        }
        let data = line.strip_prefix(DATA_PREFIX)?;
        if data.trim() == DONE_SENTINEL {
            return Some(StreamEvent::Done);
        }
        let chunk: ChatCompletionChunk = serde_json::from_str(data).ok()?;
        let choice = chunk.choices.into_iter().next()?;
        match choice.delta.content {
            Some(content) if !content.is_empty() => Some(StreamEvent::Text(content)),
            _ => None,
        }
    }
}

/// Stream of [`StreamEvent`]s decoded from a streaming response body.
///
/// Ends after the `[DONE]` sentinel or when the underlying connection
/// closes; a transport error is yielded once and ends the stream.
pub struct ChatStream<S> {
    inner: S,
    decoder: SseDecoder,
    pending: VecDeque<StreamEvent>,
    finished: bool,
}

impl<S> ChatStream<S> {
    /// Creates an event stream over a response byte stream.
    #[must_use]
    pub fn new(stream: S) -> Self {
        Self {
            inner: stream,
            decoder: SseDecoder::new(),
            pending: VecDeque::new(),
            finished: false,
        }
    }
}

impl<S> std::fmt::Debug for ChatStream<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatStream")
            .field("decoder", &self.decoder)
            .field("pending", &self.pending.len())
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl<S, E> Stream for ChatStream<S>
where
    S: Stream<Item = std::result::Result<Bytes, E>> + Unpin,
    E: std::fmt::Display,
{
    type Item = Result<StreamEvent>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Poll::Ready(Some(Ok(event)));
            }
            if self.finished || self.decoder.is_done() {
                return Poll::Ready(None);
            }

            match Pin::new(&mut self.inner).poll_next(cx) {
                Poll::Ready(Some(Ok(bytes))) => {
                    let text = String::from_utf8_lossy(&bytes);
                    let events = self.decoder.feed(&text);
                    self.pending.extend(events);
                }
                Poll::Ready(Some(Err(e))) => {
                    self.finished = true;
                    return Poll::Ready(Some(Err(LlmError::stream(e.to_string()).into())));
                }
                Poll::Ready(None) => {
                    self.finished = true;
                    let events = self.decoder.finish();
                    self.pending.extend(events);
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
