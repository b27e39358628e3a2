// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Tests for the property-order buffer.

use lesslint::props::{PropertyCategory, PropertyOrderBuffer};
use lesslint::rules::{PropertyOrderTable, Violation};

fn table() -> PropertyOrderTable {
    PropertyOrderTable::from_names(["margin", "width", "color", "background"])
}

#[test]
fn test_classify() {
    assert_eq!(PropertyCategory::classify("@size"), PropertyCategory::Value);
    assert_eq!(PropertyCategory::classify(".mixin"), PropertyCategory::Reference);
    assert_eq!(PropertyCategory::classify("#accent"), PropertyCategory::Reference);
    assert_eq!(PropertyCategory::classify("color"), PropertyCategory::Style);
}

#[test]
fn test_category_order_violation_on_add() {
    let mut buffer = PropertyOrderBuffer::new();
    buffer.add("  color: red;", "  color: red;", 3);
    buffer.add("  .mixin();", "  .mixin();", 4);

    let result = buffer.flush(&table(), 5);
    assert_eq!(result.line_start, 3);
    assert_eq!(result.line_end, 5);
    assert_eq!(result.violations.len(), 1);
    match &result.violations[0] {
        Violation::CategoryOrder {
            identifier,
            category,
            previous,
        } => {
            assert_eq!(identifier, ".mixin");
            assert_eq!(*category, PropertyCategory::Reference);
            assert_eq!(*previous, PropertyCategory::Style);
        }
        other => panic!("unexpected violation: {other:?}"),
    }
}

#[test]
fn test_value_style_reference_yields_one_violation() {
    // Value -> Style is fine, Reference after Style is the one offence.
    let mut buffer = PropertyOrderBuffer::new();
    buffer.add("@size: 1px;", "@size: 1px;", 0);
    buffer.add("color: red;", "color: red;", 1);
    buffer.add(".mixin();", ".mixin();", 2);

    let result = buffer.flush(&table(), 3);
    assert_eq!(result.violations.len(), 1);
}

#[test]
fn test_table_order_violation_at_flush() {
    let mut buffer = PropertyOrderBuffer::new();
    buffer.add("  color: red;", "  color: red;", 1);
    buffer.add("  margin: 0;", "  margin: 0;", 2);

    let result = buffer.flush(&table(), 3);
    assert_eq!(result.violations.len(), 1);
    match &result.violations[0] {
        Violation::TableOrder {
            identifier,
            previous,
        } => {
            assert_eq!(identifier, "margin");
            assert_eq!(previous, "color");
        }
        other => panic!("unexpected violation: {other:?}"),
    }
}

#[test]
fn test_unknown_properties_skipped_in_table_order() {
    let mut buffer = PropertyOrderBuffer::new();
    buffer.add("width: 1px;", "width: 1px;", 0);
    buffer.add("frobnicate: yes;", "frobnicate: yes;", 1);
    buffer.add("color: red;", "color: red;", 2);

    let result = buffer.flush(&table(), 3);
    assert!(result.violations.is_empty());
}

#[test]
fn test_flush_resets_buffer() {
    let mut buffer = PropertyOrderBuffer::new();
    buffer.add("color: red;", "color: red;", 0);
    assert_eq!(buffer.len(), 1);

    let _ = buffer.flush(&table(), 1);
    assert!(buffer.is_empty());

    // Category state resets with the buffer: a reference after the
    // flush does not compare against the drained style property.
    buffer.add(".mixin();", ".mixin();", 2);
    let result = buffer.flush(&table(), 3);
    assert!(result.violations.is_empty());
}

#[test]
fn test_empty_flush_produces_nothing() {
    let mut buffer = PropertyOrderBuffer::new();
    let result = buffer.flush(&table(), 7);
    assert!(result.violations.is_empty());
    assert_eq!(result.line_start, 7);
    assert_eq!(result.line_end, 7);
}

#[test]
fn test_non_candidates_ignored() {
    let mut buffer = PropertyOrderBuffer::new();
    buffer.add(".foo {", ".foo {", 0);
    buffer.add("}", "}", 1);
    assert!(buffer.is_empty());
}
