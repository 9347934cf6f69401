// ABOUTME: Payload locator finding JSON object/array boundaries in noisy text
// ABOUTME: Strips markdown fences and brackets the most plausible candidate span
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Intelligence

//! # Payload Locator
//!
//! Finds the most plausible JSON payload boundaries inside an arbitrary
//! text blob. The returned span is a *candidate* substring: it is not
//! required to be syntactically valid yet, validity is established later
//! by the repair ladder and the parser.

use serde::{Deserialize, Serialize};

use super::{preview, RecoveryError};

/// Discriminant of the located payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayloadKind {
    /// Payload opens with `{`
    Object,
    /// Payload opens with `[`
    Array,
}

/// Byte-offset boundaries of the best-guess payload within the raw text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocatedSpan {
    /// Offset of the opening bracket
    pub start: usize,
    /// Offset one past the end of the candidate payload
    pub end: usize,
    /// Whether the payload is an object or an array
    pub kind: PayloadKind,
}

impl LocatedSpan {
    /// Slice the candidate payload out of the raw text
    #[must_use]
    pub fn slice<'a>(&self, raw: &'a str) -> &'a str {
        &raw[self.start..self.end]
    }
}

/// Locate the most plausible payload boundaries in raw provider text
///
/// Markdown code-fence markers (```` ```json ````, ```` ``` ````) are
/// stripped first, then the earliest opening bracket determines the
/// payload kind and the last matching closing bracket bounds the span.
/// When no closing bracket follows the opener the span extends to the
/// end of the text: the repair ladder auto-closes truncated payloads.
///
/// # Errors
///
/// Returns [`RecoveryError::NoPayloadFound`] if the text contains no
/// opening bracket, or if the only closing bracket precedes the opener
/// (an inverted span is never returned).
pub fn locate(raw: &str) -> Result<LocatedSpan, RecoveryError> {
    let (window_start, window_end) = fence_window(raw);
    let window = &raw[window_start..window_end];

    let object_open = window.find('{');
    let array_open = window.find('[');

    let (open, kind) = match (object_open, array_open) {
        (Some(o), Some(a)) if o < a => (o, PayloadKind::Object),
        (Some(_), Some(a)) => (a, PayloadKind::Array),
        (Some(o), None) => (o, PayloadKind::Object),
        (None, Some(a)) => (a, PayloadKind::Array),
        (None, None) => {
            return Err(RecoveryError::NoPayloadFound {
                preview: preview(raw),
            })
        }
    };

    let close_char = match kind {
        PayloadKind::Object => '}',
        PayloadKind::Array => ']',
    };

    let end = match window.rfind(close_char) {
        Some(close) if close > open => close + 1,
        Some(_) => {
            // Closing bracket precedes the opener: no usable span.
            return Err(RecoveryError::NoPayloadFound {
                preview: preview(raw),
            });
        }
        // Truncated payload with no closer: hand the rest to the repairer.
        None => window.len(),
    };

    Ok(LocatedSpan {
        start: window_start + open,
        end: window_start + end,
        kind,
    })
}

/// Narrow the search window to the content between markdown fences
///
/// Returns byte offsets into the original text so located spans remain
/// valid against the raw response.
fn fence_window(raw: &str) -> (usize, usize) {
    if let Some(fence) = raw.find("```json") {
        let content_start = fence + "```json".len();
        let content_end = raw[content_start..]
            .find("```")
            .map_or(raw.len(), |close| content_start + close);
        return (content_start, content_end);
    }

    if let Some(fence) = raw.find("```") {
        let content_start = fence + 3;
        let content_end = raw[content_start..]
            .find("```")
            .map_or(raw.len(), |close| content_start + close);
        return (content_start, content_end);
    }

    (0, raw.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence_window_json_tag() {
        let raw = "Sure!\n```json\n{\"a\": 1}\n```\nDone.";
        let (start, end) = fence_window(raw);
        assert_eq!(raw[start..end].trim(), "{\"a\": 1}");
    }

    #[test]
    fn test_fence_window_unclosed_fence() {
        let raw = "```json\n{\"a\": 1";
        let (start, end) = fence_window(raw);
        assert_eq!(&raw[start..end], "\n{\"a\": 1");
    }

    #[test]
    fn test_fence_window_no_fence() {
        let raw = "{\"a\": 1}";
        assert_eq!(fence_window(raw), (0, raw.len()));
    }
}
