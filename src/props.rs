// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Property ordering inside declaration blocks
//!
//! Declaration-like lines are buffered from one block boundary to the
//! next. Category order (at-rules before mixin references before plain
//! styles) is checked as properties arrive, so the first offending
//! property is the one named; table order is checked once the block
//! closes, against the injected canonical ordering table.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::patterns;
use crate::rules::{PropertyOrderTable, Violation};

/// Coarse property classification used for first-pass ordering checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyCategory {
    /// At-rules and variables (`@...`).
    Value,
    /// Class or id selector references (`.mixin(...)`, `#accent;`).
    Reference,
    /// Everything else: plain style properties.
    Style,
}

impl PropertyCategory {
    /// Classify an extracted identifier.
    pub fn classify(identifier: &str) -> Self {
        if identifier.starts_with('@') {
            PropertyCategory::Value
        } else if identifier.starts_with('.') || identifier.starts_with('#') {
            PropertyCategory::Reference
        } else {
            PropertyCategory::Style
        }
    }

    /// Position in the required category order. Lower ranks must appear
    /// first inside a block.
    fn rank(self) -> u8 {
        match self {
            PropertyCategory::Value => 0,
            PropertyCategory::Reference => 1,
            PropertyCategory::Style => 2,
        }
    }
}

impl fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropertyCategory::Value => "value",
            PropertyCategory::Reference => "reference",
            PropertyCategory::Style => "style",
        };
        f.write_str(name)
    }
}

/// One buffered declaration-like line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRecord {
    /// The line text as it currently reads (fixes included).
    pub raw: String,
    /// The property/selector token with argument and terminator
    /// stripped.
    pub identifier: String,
    pub category: PropertyCategory,
}

/// Ordering violations from a flushed block. Line indices are
/// zero-based; the checker renders them 1-based.
#[derive(Debug)]
pub struct FlushResult {
    pub violations: Vec<Violation>,
    /// Line of the first buffered property.
    pub line_start: usize,
    /// Line of the block boundary that forced the flush.
    pub line_end: usize,
}

/// Buffers property candidates between block boundaries.
#[derive(Debug, Default)]
pub struct PropertyOrderBuffer {
    records: Vec<PropertyRecord>,
    previous: Option<PropertyCategory>,
    first_line: Option<usize>,
    category_violations: Vec<Violation>,
}

impl PropertyOrderBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of buffered properties.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Feed one line. Does nothing when the cleaned text is not a
    /// property candidate.
    pub fn add(&mut self, raw: &str, cleaned: &str, line_index: usize) {
        let Some(identifier) = patterns::property_identifier(cleaned) else {
            return;
        };
        let category = PropertyCategory::classify(&identifier);

        if let Some(previous) = self.previous {
            if category.rank() < previous.rank() {
                self.category_violations.push(Violation::CategoryOrder {
                    identifier: identifier.clone(),
                    category,
                    previous,
                });
            }
        }
        self.previous = Some(category);
        self.first_line.get_or_insert(line_index);
        self.records.push(PropertyRecord {
            raw: raw.to_string(),
            identifier,
            category,
        });
    }

    /// Validate the buffered block and drain it, leaving a fresh empty
    /// buffer behind. Category violations collected so far come first,
    /// then table-order violations; all are attributed to the span from
    /// the first buffered property through `line_end`.
    ///
    /// Table order: among properties the table knows, each must rank at
    /// least as high as the last table-ranked property seen. Unknown
    /// properties are skipped, not compared.
    pub fn flush(&mut self, table: &PropertyOrderTable, line_end: usize) -> FlushResult {
        let buffer = std::mem::take(self);
        let mut violations = buffer.category_violations;

        let mut previous: Option<(String, usize)> = None;
        for record in &buffer.records {
            let Some(rank) = table.rank(&record.identifier) else {
                continue;
            };
            if let Some((ref previous_id, previous_rank)) = previous {
                if rank < previous_rank {
                    violations.push(Violation::TableOrder {
                        identifier: record.identifier.clone(),
                        previous: previous_id.clone(),
                    });
                }
            }
            previous = Some((record.identifier.clone(), rank));
        }

        FlushResult {
            violations,
            line_start: buffer.first_line.unwrap_or(line_end),
            line_end,
        }
    }
}
