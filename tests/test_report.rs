// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Tests for report types and the JSON run inventory.

use lesslint::report::{FileReport, Report, RunInventory, Summary};

#[test]
fn test_parse_minimal_inventory() {
    let json = r#"{
        "generated": "2025-08-06 10:00:00 UTC",
        "files": [],
        "totals": { "line_count": 0, "error_count": 0, "fixed_count": 0 }
    }"#;

    let inventory = RunInventory::from_str(json).unwrap();
    assert_eq!(inventory.generated, "2025-08-06 10:00:00 UTC");
    assert!(inventory.files.is_empty());
    assert_eq!(inventory.totals, Summary::default());
}

#[test]
fn test_parse_inventory_with_files() {
    let json = r#"{
        "generated": "2025-08-06 10:00:00 UTC",
        "files": [
            {
                "path": "styles/app.less",
                "summary": { "line_count": 40, "error_count": 2, "fixed_count": 1 },
                "messages": ["Tabs used on line 3 (FIXED)."],
                "fixed": true
            },
            {
                "path": "styles/base.less",
                "summary": { "line_count": 10, "error_count": 0, "fixed_count": 0 }
            }
        ],
        "totals": { "line_count": 50, "error_count": 2, "fixed_count": 1 }
    }"#;

    let inventory = RunInventory::from_str(json).unwrap();
    assert_eq!(inventory.files.len(), 2);
    assert!(inventory.files[0].fixed);
    // Missing optional fields default.
    assert!(inventory.files[1].messages.is_empty());
    assert!(!inventory.files[1].fixed);
}

#[test]
fn test_inventory_round_trip() {
    let summary = Summary {
        line_count: 40,
        error_count: 2,
        fixed_count: 1,
    };
    let inventory = RunInventory {
        generated: "2025-08-06 10:00:00 UTC".to_string(),
        files: vec![FileReport {
            path: "styles/app.less".to_string(),
            summary,
            messages: vec!["Tabs used on line 3 (FIXED).".to_string()],
            fixed: true,
        }],
        totals: summary,
    };

    let json = inventory.to_json().unwrap();
    let parsed = RunInventory::from_str(&json).unwrap();
    assert_eq!(parsed.files.len(), 1);
    assert_eq!(parsed.files[0].summary, summary);
    assert_eq!(parsed.totals, summary);
}

#[test]
fn test_report_ordered_messages() {
    let mut report = Report::default();
    report.errors_by_line.entry(4).or_default().push("later".to_string());
    report.errors_by_line.entry(1).or_default().push("first".to_string());
    report.errors_by_line.entry(1).or_default().push("second".to_string());

    assert_eq!(report.ordered_messages(), vec!["first", "second", "later"]);
    assert!(report.is_clean());
}
