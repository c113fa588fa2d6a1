//! Incremental server-sent-events framing.
//!
//! [`SseFrameDecoder`] turns a chunked byte stream into complete event
//! payloads:
//! - Line buffering across arbitrary chunk boundaries (`\n` / `\r\n`)
//! - Comment lines (leading `:`) skipped
//! - Multi-line `data:` accumulation, joined with `\n`
//! - Blank-line event boundaries
//! - Non-`data` fields (`event`, `id`, `retry`) ignored — the live endpoint
//!   uses the default event type only
//!
//! The decoder is transport-agnostic: the subscription pump feeds it
//! response chunks and drains completed payloads.

use std::collections::VecDeque;

use bytes::BytesMut;

/// Incremental decoder from SSE byte chunks to event data payloads.
#[derive(Debug, Default)]
pub struct SseFrameDecoder {
    /// Raw bytes not yet consumed as a complete line.
    buffer: BytesMut,
    /// `data` lines of the event currently being assembled.
    data_lines: Vec<String>,
    /// Completed event payloads awaiting [`next_event`](Self::next_event).
    events: VecDeque<String>,
}

impl SseFrameDecoder {
    /// Create an empty decoder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of bytes and process every complete line it closes.
    pub fn feed(&mut self, chunk: &[u8]) {
        self.buffer.extend_from_slice(chunk);

        while let Some(newline_pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let mut line_bytes = self.buffer.split_to(newline_pos + 1);
            line_bytes.truncate(line_bytes.len() - 1);
            if line_bytes.last() == Some(&b'\r') {
                line_bytes.truncate(line_bytes.len() - 1);
            }

            // Skip lines that are not valid UTF-8
            let Ok(line) = std::str::from_utf8(&line_bytes) else {
                continue;
            };
            self.handle_line(line);
        }
    }

    /// Pop the next completed event payload, in arrival order.
    pub fn next_event(&mut self) -> Option<String> {
        self.events.pop_front()
    }

    /// Signal end of input, flushing a trailing unterminated event if any.
    ///
    /// A browser `EventSource` discards events the server never terminated;
    /// this decoder is lenient and dispatches them, since the common case for
    /// a truncated tail is the server closing the stream mid-event.
    pub fn finish(&mut self) {
        if !self.buffer.is_empty() {
            let tail = self.buffer.split();
            if let Ok(line) = std::str::from_utf8(&tail) {
                self.handle_line(line.trim_end_matches('\r'));
            }
        }
        self.flush_event();
    }

    /// Process one decoded line according to the event-stream grammar.
    fn handle_line(&mut self, line: &str) {
        if line.is_empty() {
            self.flush_event();
            return;
        }
        if line.starts_with(':') {
            return; // comment
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            // A line with no colon is a field name with an empty value
            None => (line, ""),
        };

        if field == "data" {
            self.data_lines.push(value.to_owned());
        }
        // event/id/retry and unknown fields are ignored
    }

    /// Complete the event being assembled, if it has any data.
    fn flush_event(&mut self) {
        if self.data_lines.is_empty() {
            return;
        }
        let payload = self.data_lines.join("\n");
        self.data_lines.clear();
        self.events.push_back(payload);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(decoder: &mut SseFrameDecoder) -> Vec<String> {
        let mut out = Vec::new();
        while let Some(event) = decoder.next_event() {
            out.push(event);
        }
        out
    }

    #[test]
    fn single_event() {
        let mut decoder = SseFrameDecoder::new();
        decoder.feed(b"data: {\"score\": 10}\n\n");
        assert_eq!(drain(&mut decoder), vec!["{\"score\": 10}"]);
    }

    #[test]
    fn no_space_after_colon() {
        let mut decoder = SseFrameDecoder::new();
        decoder.feed(b"data:{\"score\":10}\n\n");
        assert_eq!(drain(&mut decoder), vec!["{\"score\":10}"]);
    }

    #[test]
    fn multiple_events_in_one_chunk() {
        let mut decoder = SseFrameDecoder::new();
        decoder.feed(b"data: {\"a\":1}\n\ndata: {\"b\":2}\n\n");
        assert_eq!(drain(&mut decoder), vec!["{\"a\":1}", "{\"b\":2}"]);
    }

    #[test]
    fn event_split_across_chunks() {
        let mut decoder = SseFrameDecoder::new();
        decoder.feed(b"data: {\"par");
        assert!(decoder.next_event().is_none());
        decoder.feed(b"tial\":true}\n\n");
        assert_eq!(drain(&mut decoder), vec!["{\"partial\":true}"]);
    }

    #[test]
    fn multiline_data_joined_with_newline() {
        let mut decoder = SseFrameDecoder::new();
        decoder.feed(b"data: first\ndata: second\n\n");
        assert_eq!(drain(&mut decoder), vec!["first\nsecond"]);
    }

    #[test]
    fn carriage_returns_stripped() {
        let mut decoder = SseFrameDecoder::new();
        decoder.feed(b"data: {\"cr\":true}\r\n\r\n");
        assert_eq!(drain(&mut decoder), vec!["{\"cr\":true}"]);
    }

    #[test]
    fn comments_are_skipped() {
        let mut decoder = SseFrameDecoder::new();
        decoder.feed(b": keep-alive\n\ndata: {\"v\":1}\n\n");
        assert_eq!(drain(&mut decoder), vec!["{\"v\":1}"]);
    }

    #[test]
    fn non_data_fields_are_ignored() {
        let mut decoder = SseFrameDecoder::new();
        decoder.feed(b"event: ping\nid: 7\nretry: 500\ndata: {\"v\":1}\n\n");
        assert_eq!(drain(&mut decoder), vec!["{\"v\":1}"]);
    }

    #[test]
    fn blank_lines_without_data_produce_nothing() {
        let mut decoder = SseFrameDecoder::new();
        decoder.feed(b"\n\n\nevent: ping\n\n");
        assert!(decoder.next_event().is_none());
    }

    #[test]
    fn finish_flushes_unterminated_event() {
        let mut decoder = SseFrameDecoder::new();
        decoder.feed(b"data: {\"trailing\":true}");
        assert!(decoder.next_event().is_none());
        decoder.finish();
        assert_eq!(drain(&mut decoder), vec!["{\"trailing\":true}"]);
    }

    #[test]
    fn finish_on_empty_decoder_is_quiet() {
        let mut decoder = SseFrameDecoder::new();
        decoder.finish();
        assert!(decoder.next_event().is_none());
    }

    #[test]
    fn invalid_utf8_line_is_skipped() {
        let mut decoder = SseFrameDecoder::new();
        decoder.feed(b"\xff\xfe\ndata: {\"ok\":true}\n\n");
        assert_eq!(drain(&mut decoder), vec!["{\"ok\":true}"]);
    }

    #[test]
    fn order_is_preserved() {
        let mut decoder = SseFrameDecoder::new();
        decoder.feed(b"data: 1\n\ndata: 2\n\ndata: 3\n\n");
        assert_eq!(drain(&mut decoder), vec!["1", "2", "3"]);
    }
}
