// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Check reports and the JSON run inventory
//!
//! `Report` is what one checking run produces; `RunInventory` is the
//! JSON export written by `lesslint-check --json`, one entry per file.
//! Use `RunInventory::from_file()` to load a saved inventory for
//! analysis.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Aggregate counts for one checked source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Lines in the input (and in the fixed output).
    pub line_count: usize,
    /// Violations reported.
    pub error_count: usize,
    /// Violations repaired by a fixer.
    pub fixed_count: usize,
}

/// The result of checking one source text. Grows monotonically during
/// a run; finalized once at the end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    pub summary: Summary,
    /// Zero-based line index to the messages reported on that line, in
    /// the order the rules produced them.
    pub errors_by_line: BTreeMap<usize, Vec<String>>,
    /// The source after fixers ran. Equal to the input when nothing
    /// changed.
    pub fixed_source: String,
}

impl Report {
    /// All messages in line order.
    pub fn ordered_messages(&self) -> Vec<&str> {
        self.errors_by_line
            .values()
            .flat_map(|messages| messages.iter().map(String::as_str))
            .collect()
    }

    /// True when no violations were found.
    pub fn is_clean(&self) -> bool {
        self.summary.error_count == 0
    }
}

/// One file's entry in the run inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub path: String,
    pub summary: Summary,
    #[serde(default)]
    pub messages: Vec<String>,
    /// The file was rewritten (backup written first).
    #[serde(default)]
    pub fixed: bool,
}

/// JSON inventory of a whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunInventory {
    /// Timestamp when the inventory was generated.
    pub generated: String,
    /// Files in the order they were checked.
    pub files: Vec<FileReport>,
    /// Aggregate counts over all files.
    pub totals: Summary,
}

impl RunInventory {
    /// Load an inventory from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read inventory file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse inventory JSON: {}", path.display()))
    }

    /// Parse an inventory from a JSON string.
    pub fn from_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse inventory JSON")
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize inventory")
    }
}
