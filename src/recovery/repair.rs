// ABOUTME: Progressive repair ladder coaxing malformed provider text into parseable JSON
// ABOUTME: Fixed-order pure string transforms with a re-parse attempt after each step
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Intelligence

//! # Progressive Repairer
//!
//! Applies an ordered, bounded ladder of textual fixes to a candidate
//! payload, re-attempting a strict parse after each fix and stopping at
//! the first success. Each transformation is pure, total, and idempotent
//! on already-valid JSON, and each step applies to the
//! *already-transformed* string so fixes compose.
//!
//! The ladder, in fixed order:
//!
//! 1. strip trailing garbage outside matched brackets
//! 2. quote unquoted object keys
//! 3. normalize single to double quotes
//! 4. remove trailing commas before closing brackets
//! 5. strip raw control characters
//! 6. escape embedded newlines/tabs/carriage-returns inside string literals
//! 7. auto-close unbalanced arrays
//! 8. auto-close unbalanced objects
//!
//! There is no backtracking or re-ordering: worst-case work is
//! O(steps x len) and the control flow is fully deterministic.

use serde_json::Value;
use tracing::{debug, trace};

use super::{preview, RecoveryError};

/// The fixed repair ladder: `(step name, transform)` in application order
const REPAIR_STEPS: &[(&str, fn(&str) -> String)] = &[
    ("strip_trailing_garbage", strip_trailing_garbage),
    ("quote_unquoted_keys", quote_unquoted_keys),
    ("normalize_single_quotes", normalize_single_quotes),
    ("remove_trailing_commas", remove_trailing_commas),
    ("strip_control_characters", strip_control_characters),
    ("escape_embedded_whitespace", escape_embedded_whitespace),
    ("close_unbalanced_arrays", close_unbalanced_arrays),
    ("close_unbalanced_objects", close_unbalanced_objects),
];

/// Result of a successful repair-and-parse
#[derive(Debug, Clone)]
pub struct RepairOutcome {
    /// The parsed tree
    pub value: Value,
    /// How many ladder steps were applied before the parse succeeded
    /// (zero for already-valid input)
    pub steps_applied: usize,
}

/// Repair a candidate payload and parse it into a generic tree
///
/// The candidate is parsed as-is first; valid input passes through in
/// zero repair steps.
///
/// # Errors
///
/// Returns [`RecoveryError::Unparseable`] if every ladder step has been
/// applied and the result still fails to parse.
pub fn repair_and_parse(candidate: &str) -> Result<RepairOutcome, RecoveryError> {
    if let Ok(value) = serde_json::from_str(candidate) {
        return Ok(RepairOutcome {
            value,
            steps_applied: 0,
        });
    }

    let mut current = candidate.to_owned();
    for (applied, (name, step)) in REPAIR_STEPS.iter().enumerate() {
        current = step(&current);
        trace!(step = name, "applied repair step");

        if let Ok(value) = serde_json::from_str(&current) {
            debug!(steps = applied + 1, last_step = name, "repair ladder produced a parseable payload");
            return Ok(RepairOutcome {
                value,
                steps_applied: applied + 1,
            });
        }
    }

    Err(RecoveryError::Unparseable {
        steps_applied: REPAIR_STEPS.len(),
        preview: preview(&current),
    })
}

// ============================================================================
// String-literal tracking
// ============================================================================

/// Tracks whether the scan position is inside a string literal
///
/// Steps that run before quote normalization treat both `'` and `"` as
/// string delimiters; later steps only see double quotes.
struct QuoteTracker {
    delim: Option<char>,
    escaped: bool,
    single_quotes: bool,
}

impl QuoteTracker {
    const fn new(single_quotes: bool) -> Self {
        Self {
            delim: None,
            escaped: false,
            single_quotes,
        }
    }

    /// Advance over one character; returns true when the character belongs
    /// to a string literal (delimiters included)
    fn advance(&mut self, c: char) -> bool {
        if let Some(delim) = self.delim {
            if self.escaped {
                self.escaped = false;
            } else if c == '\\' {
                self.escaped = true;
            } else if c == delim {
                self.delim = None;
            }
            return true;
        }

        if c == '"' || (self.single_quotes && c == '\'') {
            self.delim = Some(c);
            return true;
        }

        false
    }
}

// ============================================================================
// Ladder steps
// ============================================================================

/// Step 1: drop everything after the first balanced top-level payload
///
/// Leaves the input untouched when the brackets never balance; the
/// auto-close steps deal with truncation.
fn strip_trailing_garbage(input: &str) -> String {
    let Some(open) = input.find(['{', '[']) else {
        return input.to_owned();
    };

    let mut tracker = QuoteTracker::new(true);
    let mut depth: usize = 0;

    for (i, c) in input[open..].char_indices() {
        if tracker.advance(c) {
            continue;
        }
        match c {
            '{' | '[' => depth += 1,
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return input[..open + i + c.len_utf8()].to_owned();
                }
            }
            _ => {}
        }
    }

    input.to_owned()
}

/// Step 2: wrap bare identifiers in double quotes when used as object keys
fn quote_unquoted_keys(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 16);
    let mut tracker = QuoteTracker::new(true);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if tracker.advance(c) {
            out.push(c);
            i += 1;
            continue;
        }

        out.push(c);
        i += 1;

        // A key position only opens after `{` or `,`.
        if c != '{' && c != ',' {
            continue;
        }

        let mut j = i;
        while j < chars.len() && chars[j].is_whitespace() {
            j += 1;
        }
        let ident_start = j;
        while j < chars.len()
            && (chars[j].is_ascii_alphanumeric() || chars[j] == '_' || chars[j] == '$')
        {
            j += 1;
        }
        if j == ident_start {
            continue;
        }

        let mut k = j;
        while k < chars.len() && chars[k].is_whitespace() {
            k += 1;
        }
        if k < chars.len() && chars[k] == ':' {
            for ws in &chars[i..ident_start] {
                out.push(*ws);
            }
            out.push('"');
            for ident in &chars[ident_start..j] {
                out.push(*ident);
            }
            out.push('"');
            i = j;
        }
    }

    out
}

/// Step 3: convert single-quoted string literals to double-quoted ones
///
/// Embedded double quotes gain an escape, escaped single quotes lose
/// theirs. Single quotes inside double-quoted strings are untouched.
fn normalize_single_quotes(input: &str) -> String {
    enum State {
        Outside,
        Double,
        Single,
    }

    let mut out = String::with_capacity(input.len());
    let mut state = State::Outside;
    let mut escaped = false;

    for c in input.chars() {
        match state {
            State::Outside => match c {
                '"' => {
                    state = State::Double;
                    out.push(c);
                }
                '\'' => {
                    state = State::Single;
                    out.push('"');
                }
                _ => out.push(c),
            },
            State::Double => {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == '"' {
                    state = State::Outside;
                }
                out.push(c);
            }
            State::Single => {
                if escaped {
                    escaped = false;
                    if c == '\'' {
                        out.push('\'');
                    } else {
                        out.push('\\');
                        out.push(c);
                    }
                } else if c == '\\' {
                    escaped = true;
                } else if c == '\'' {
                    state = State::Outside;
                    out.push('"');
                } else if c == '"' {
                    out.push_str("\\\"");
                } else {
                    out.push(c);
                }
            }
        }
    }

    out
}

/// Step 4: remove commas that directly precede a closing bracket
///
/// Applied to a fixpoint so comma runs (`[,,]`) collapse fully.
fn remove_trailing_commas(input: &str) -> String {
    let mut current = remove_trailing_commas_once(input);
    loop {
        let next = remove_trailing_commas_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn remove_trailing_commas_once(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut tracker = QuoteTracker::new(false);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if tracker.advance(c) {
            out.push(c);
            i += 1;
            continue;
        }

        if c == ',' {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            if j < chars.len() && (chars[j] == '}' || chars[j] == ']') {
                i += 1;
                continue;
            }
        }

        out.push(c);
        i += 1;
    }

    out
}

/// Step 5: remove raw control characters that JSON never allows
///
/// Newlines, tabs, and carriage returns survive: outside strings they are
/// legal whitespace, inside strings the next step escapes them.
fn strip_control_characters(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\t' | '\r'))
        .collect()
}

/// Step 6: escape raw newlines, tabs, and carriage returns inside strings
fn escape_embedded_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    let mut tracker = QuoteTracker::new(false);

    for c in input.chars() {
        if tracker.advance(c) {
            match c {
                '\n' => out.push_str("\\n"),
                '\t' => out.push_str("\\t"),
                '\r' => out.push_str("\\r"),
                _ => out.push(c),
            }
        } else {
            out.push(c);
        }
    }

    out
}

/// Step 7: append `]` for arrays left open at the end of the input
fn close_unbalanced_arrays(input: &str) -> String {
    let mut stack = open_frames(input);
    let mut out = input.to_owned();

    while stack.last() == Some(&'[') {
        out.push(']');
        stack.pop();
    }

    out
}

/// Step 8: close the remaining open frames in reverse nesting order
///
/// After step 7 the innermost open frame is always an object; arrays
/// pinned beneath unclosed objects are closed on the way out.
fn close_unbalanced_objects(input: &str) -> String {
    let mut out = input.to_owned();

    for frame in open_frames(input).iter().rev() {
        out.push(if *frame == '{' { '}' } else { ']' });
    }

    out
}

/// Compute the stack of brackets still open at the end of the input
fn open_frames(input: &str) -> Vec<char> {
    let mut tracker = QuoteTracker::new(false);
    let mut stack = Vec::new();

    for c in input.chars() {
        if tracker.advance(c) {
            continue;
        }
        match c {
            '{' | '[' => stack.push(c),
            '}' => {
                if stack.last() == Some(&'{') {
                    stack.pop();
                }
            }
            ']' => {
                if stack.last() == Some(&'[') {
                    stack.pop();
                }
            }
            _ => {}
        }
    }

    stack
}
