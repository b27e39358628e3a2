// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Named text patterns behind the structural checks
//!
//! The checker never parses stylesheets. These predicates pin down
//! exactly what counts as a property candidate, a mis-spaced colon, or
//! a comment trailing code, so each can be tested on its own and the
//! rules stay free of inline regex.

use std::sync::OnceLock;

use regex::Regex;

/// A class/id reference token followed by `(` or `;`, e.g. `.mixin(`
/// or `#accent;`.
fn reference_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.#][\w-]*[(;]").unwrap())
}

/// An at-rule or bare-word token followed by a colon and a value, e.g.
/// `@size: 10px` or `color: red`.
fn declaration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"@?[\w][\w-]*\s*:\s*\S").unwrap())
}

/// Whitespace immediately before a colon.
fn space_before_colon_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s:").unwrap())
}

/// A colon missing its trailing space: followed by a character that is
/// neither whitespace nor another colon, and not itself preceded by a
/// colon (so `::before` pseudo-elements are not flagged).
fn colon_no_space_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:^|[^:]):[^\s:]").unwrap())
}

/// The identifier of a property candidate on a comment-stripped line:
/// the earliest reference or declaration match, truncated at the first
/// of `:`, `(`, `;`. Declarations on lines that end with `{` are not
/// candidates (the value opens a nested block).
pub fn property_identifier(cleaned: &str) -> Option<String> {
    let reference = reference_re().find(cleaned);
    let declaration = if cleaned.trim_end().ends_with('{') {
        None
    } else {
        declaration_re().find(cleaned)
    };

    let matched = match (reference, declaration) {
        (Some(r), Some(d)) => {
            if r.start() <= d.start() {
                r
            } else {
                d
            }
        }
        (Some(r), None) => r,
        (None, Some(d)) => d,
        (None, None) => return None,
    };

    let text = matched.as_str();
    let end = text.find([':', '(', ';']).unwrap_or(text.len());
    let identifier = text[..end].trim();
    if identifier.is_empty() {
        None
    } else {
        Some(identifier.to_string())
    }
}

/// The comment-stripped line declares a property, at-rule, or mixin
/// reference.
pub fn is_property_candidate(cleaned: &str) -> bool {
    property_identifier(cleaned).is_some()
}

/// Whitespace immediately precedes a colon somewhere on the line.
pub fn has_space_before_colon(line: &str) -> bool {
    space_before_colon_re().is_match(line)
}

/// A colon is followed by a non-whitespace character, on a line whose
/// trimmed text does not end with `{`. Lines opening a nested block
/// are exempt.
pub fn has_colon_without_space(line: &str) -> bool {
    if line.trim_end().ends_with('{') {
        return false;
    }
    colon_no_space_re().is_match(line)
}

/// Code-looking text precedes a `/*` that never closes on this line.
pub fn comment_appended_after_code(line: &str) -> bool {
    let Some(pos) = line.rfind("/*") else {
        return false;
    };
    if line[pos..].contains("*/") {
        return false;
    }
    line[..pos].chars().any(|c| c.is_alphanumeric() || c == '_')
}
