// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Tests for the cross-line state tracker.

use lesslint::rules::Violation;
use lesslint::state::{strip_comments, update, CheckState};

#[test]
fn test_strip_plain_line() {
    let (cleaned, inside) = strip_comments(".foo { color: red; }", false);
    assert_eq!(cleaned, ".foo { color: red; }");
    assert!(!inside);
}

#[test]
fn test_strip_inline_block_comment() {
    let (cleaned, inside) = strip_comments("a /* b */ c", false);
    assert_eq!(cleaned, "a  c");
    assert!(!inside);
}

#[test]
fn test_strip_line_comment_hides_block_marker() {
    // A /* behind // must not open a multi-line comment.
    let (cleaned, inside) = strip_comments("x // see /*", false);
    assert_eq!(cleaned, "x ");
    assert!(!inside);
}

#[test]
fn test_strip_unterminated_comment_opens_state() {
    let (cleaned, inside) = strip_comments("code(); /* note", false);
    assert_eq!(cleaned, "code(); ");
    assert!(inside);
}

#[test]
fn test_strip_closing_line() {
    let (cleaned, inside) = strip_comments(" end */ tail", true);
    assert_eq!(cleaned, " tail");
    assert!(!inside);
}

#[test]
fn test_strip_interior_line_stays_inside() {
    let (cleaned, inside) = strip_comments(" * bullet {", true);
    assert_eq!(cleaned, "");
    assert!(inside);
}

#[test]
fn test_strip_reopened_comment() {
    let (cleaned, inside) = strip_comments("/* a */ x /*", false);
    assert_eq!(cleaned, " x ");
    assert!(inside);
}

#[test]
fn test_update_counts_braces_outside_comments() {
    let (next, scan) = update(CheckState::default(), ".a { /* { */");
    assert_eq!(next.nest_depth, 1);
    assert!(scan.violations.is_empty());
}

#[test]
fn test_update_multiple_open_braces() {
    let (next, scan) = update(CheckState::default(), ".a { .b {");
    assert_eq!(next.nest_depth, 2);
    assert_eq!(scan.violations, vec![Violation::MultipleOpeningBraces]);
}

#[test]
fn test_update_multiple_close_braces() {
    let state = CheckState {
        inside_comment: false,
        nest_depth: 2,
    };
    let (next, scan) = update(state, "}}");
    assert_eq!(next.nest_depth, 0);
    assert_eq!(scan.violations, vec![Violation::MultipleClosingBraces]);
}

#[test]
fn test_update_comment_flags() {
    let (next, scan) = update(CheckState::default(), "text /* open");
    assert!(next.inside_comment);
    assert!(!scan.inside_before);
    assert!(scan.inside_after);
    assert!(!scan.closed_comment);

    let (next, scan) = update(next, " end */");
    assert!(!next.inside_comment);
    assert!(scan.inside_before);
    assert!(!scan.inside_after);
    assert!(scan.closed_comment);
}

#[test]
fn test_brace_balance_over_file() {
    // Final depth equals unmatched opens minus unmatched closes,
    // counted only outside comments.
    let source = "/* { */\n.a {\n// }\n.b { }\n.c {\n}";
    let mut state = CheckState::default();
    for line in source.split('\n') {
        let (next, _) = update(state, line);
        state = next;
    }
    assert_eq!(state.nest_depth, 1);
}

#[test]
fn test_depth_can_go_negative() {
    let (next, _) = update(CheckState::default(), "}");
    assert_eq!(next.nest_depth, -1);
}
