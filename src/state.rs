// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Cross-line checking state
//!
//! The checker threads an explicit state value through the file: the
//! multi-line comment flag and the brace nesting depth. `update`
//! consumes the previous state and one raw line and produces the next
//! state plus everything the per-line rules need to know about that
//! line's structure. Keeping the state a plain value makes the state
//! machine testable without running a whole file.

use crate::rules::Violation;

/// State carried between lines. Advanced once per line, before the
/// rules run. Never reset mid-file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckState {
    /// Inside an unterminated `/* ... */` comment.
    pub inside_comment: bool,
    /// Net count of unmatched `{` seen so far, outside comments. May go
    /// negative on pathological input.
    pub nest_depth: i32,
}

/// What the tracker learned about a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineScan {
    /// The line with single- and multi-line comment spans removed.
    pub cleaned: String,
    /// Comment flag before the line was scanned.
    pub inside_before: bool,
    /// Comment flag after the line was scanned.
    pub inside_after: bool,
    /// The line contains the `*/` that ends a multi-line comment.
    pub closed_comment: bool,
    /// Structural violations found while counting braces.
    pub violations: Vec<Violation>,
}

/// Advance the state over one raw line.
///
/// Brace counting operates on the comment-stripped text, so braces in
/// comments never change the depth. More than one `{` or `}` on a line
/// is a structural violation, reported once per character class while
/// depth tracking proceeds normally.
pub fn update(state: CheckState, raw: &str) -> (CheckState, LineScan) {
    let inside_before = state.inside_comment;
    let (cleaned, inside_after) = strip_comments(raw, inside_before);

    let opens = cleaned.matches('{').count();
    let closes = cleaned.matches('}').count();

    let mut violations = Vec::new();
    if opens > 1 {
        violations.push(Violation::MultipleOpeningBraces);
    }
    if closes > 1 {
        violations.push(Violation::MultipleClosingBraces);
    }

    let next = CheckState {
        inside_comment: inside_after,
        nest_depth: state.nest_depth + opens as i32 - closes as i32,
    };
    let scan = LineScan {
        cleaned,
        inside_before,
        inside_after,
        closed_comment: inside_before && !inside_after,
        violations,
    };
    (next, scan)
}

/// Remove comment spans from one line, given whether the line starts
/// inside a multi-line comment. Returns the visible text and whether a
/// multi-line comment is still open at the end of the line.
///
/// A `//` hides the rest of the line, including any comment markers
/// behind it, without affecting the multi-line state.
pub fn strip_comments(raw: &str, mut inside: bool) -> (String, bool) {
    let mut cleaned = String::with_capacity(raw.len());
    let mut rest = raw;

    loop {
        if inside {
            match rest.find("*/") {
                Some(pos) => {
                    rest = &rest[pos + 2..];
                    inside = false;
                }
                None => break,
            }
        } else {
            match (rest.find("/*"), rest.find("//")) {
                (Some(block), Some(line)) if line < block => {
                    cleaned.push_str(&rest[..line]);
                    break;
                }
                (Some(block), _) => {
                    cleaned.push_str(&rest[..block]);
                    rest = &rest[block + 2..];
                    inside = true;
                }
                (None, Some(line)) => {
                    cleaned.push_str(&rest[..line]);
                    break;
                }
                (None, None) => {
                    cleaned.push_str(rest);
                    break;
                }
            }
        }
    }

    (cleaned, inside)
}
