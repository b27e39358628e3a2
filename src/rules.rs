// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Convention rules for Less stylesheets
//!
//! Holds the rule limits, the declared per-line rule execution order,
//! the violation kinds with their optional fixers, and the canonical
//! property ordering table that the property-order check consumes as
//! injected data.

use std::collections::HashMap;

use crate::fixes;
use crate::props::PropertyCategory;

/// Maximum allowed line length.
pub const MAX_LINE_LENGTH: usize = 100;

/// Maximum allowed selector nesting depth.
pub const MAX_NEST_DEPTH: i32 = 7;

/// The per-line rules the checker can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRule {
    DocumentComment,
    NestDepth,
    Colons,
    Tabs,
    MultilineComments,
    PropertyOrder,
}

/// Rule execution order, declared once. The order matters: later rules
/// read line text that earlier rules may have rewritten.
pub const RULE_SEQUENCE: &[LineRule] = &[
    LineRule::DocumentComment,
    LineRule::NestDepth,
    LineRule::Colons,
    LineRule::Tabs,
    LineRule::MultilineComments,
    LineRule::PropertyOrder,
];

/// A convention violation, tagged per kind. Ordering kinds carry the
/// identifiers their messages name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    NoDocumentComment,
    DocumentCommentNotFirst,
    MultipleOpeningBraces,
    MultipleClosingBraces,
    TooDeeplyNested,
    SpaceBeforeColon,
    ColonNotFollowedBySpace,
    TabsUsed,
    LineTooLong { max: usize },
    CommentAfterCode,
    CategoryOrder {
        identifier: String,
        category: PropertyCategory,
        previous: PropertyCategory,
    },
    TableOrder { identifier: String, previous: String },
}

impl Violation {
    /// The fixer registered for this kind, if any. Structural and
    /// ordering violations have none: repairing them would require
    /// semantic reasoning about the stylesheet.
    pub fn fixer(&self) -> Option<fn(&str) -> String> {
        match self {
            Violation::DocumentCommentNotFirst => Some(fixes::document_comment),
            Violation::SpaceBeforeColon => Some(fixes::space_before_colon),
            Violation::ColonNotFollowedBySpace => Some(fixes::space_after_colons),
            Violation::TabsUsed => Some(fixes::tabs),
            _ => None,
        }
    }

    /// Human-readable message, without the location suffix.
    pub fn message(&self) -> String {
        match self {
            Violation::NoDocumentComment => "No document comment".to_string(),
            Violation::DocumentCommentNotFirst => {
                "First character is not the start of a multiline comment".to_string()
            }
            Violation::MultipleOpeningBraces => "Multiple opening curly braces".to_string(),
            Violation::MultipleClosingBraces => "Multiple closing curly braces".to_string(),
            Violation::TooDeeplyNested => "Styling too deeply nested".to_string(),
            Violation::SpaceBeforeColon => "Space before colon".to_string(),
            Violation::ColonNotFollowedBySpace => "Colon not followed by a space".to_string(),
            Violation::TabsUsed => "Tabs used".to_string(),
            Violation::LineTooLong { max } => format!("Comment longer than {max} characters"),
            Violation::CommentAfterCode => "Multiline comment appended after code".to_string(),
            Violation::CategoryOrder { identifier, category, previous } => format!(
                "Property \"{identifier}\" of type \"{category}\" cannot be preceded by properties of type \"{previous}\""
            ),
            Violation::TableOrder { identifier, previous } => {
                format!("Property \"{identifier}\" must not appear after \"{previous}\"")
            }
        }
    }
}

/// Canonical property ordering supplied to the property-order check.
///
/// Built from a list of identifiers in canonical order; earlier entries
/// rank lower and must appear first inside a declaration block.
/// Identifiers absent from the table are never compared.
#[derive(Debug, Clone, Default)]
pub struct PropertyOrderTable {
    ranks: HashMap<String, usize>,
}

impl PropertyOrderTable {
    /// Build a table from identifiers in canonical order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ranks = names
            .into_iter()
            .enumerate()
            .map(|(rank, name)| (name.into(), rank))
            .collect();
        PropertyOrderTable { ranks }
    }

    /// Rank of an identifier, if the table knows it.
    pub fn rank(&self, identifier: &str) -> Option<usize> {
        self.ranks.get(identifier).copied()
    }

    /// Number of identifiers in the table.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// The default canonical property order.
pub fn default_property_order() -> PropertyOrderTable {
    PropertyOrderTable::from_names(DEFAULT_PROPERTY_ORDER.iter().copied())
}

/// Known CSS properties in their required declaration order, grouped by
/// concern.
const DEFAULT_PROPERTY_ORDER: &[&str] = &[
    // Page
    "marks",
    "orphans",
    "page",
    "page-break-after",
    "page-break-before",
    "page-break-inside",
    "size",
    "widows",
    // Box behaviour
    "clear",
    "cursor",
    "display",
    "float",
    "opacity",
    "visibility",
    // Tables
    "table-layout",
    "caption-side",
    "border-collapse",
    "border-spacing",
    "empty-cells",
    // Positioning
    "position",
    "clip",
    "top",
    "right",
    "bottom",
    "left",
    "z-index",
    // Margin
    "margin",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    // Border
    "outline",
    "outline-color",
    "outline-style",
    "outline-width",
    "border",
    "border-top",
    "border-right",
    "border-bottom",
    "border-left",
    "border-width",
    "border-top-width",
    "border-right-width",
    "border-bottom-width",
    "border-left-width",
    "border-style",
    "border-top-style",
    "border-right-style",
    "border-bottom-style",
    "border-left-style",
    "border-color",
    "border-top-color",
    "border-right-color",
    "border-bottom-color",
    "border-left-color",
    // Padding
    "padding",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    // Dimensions
    "width",
    "max-width",
    "min-width",
    "height",
    "max-height",
    "min-height",
    // Content box behaviour
    "overflow",
    "white-space",
    // Lists
    "list-style",
    "list-style-image",
    "list-style-position",
    "list-style-type",
    // Generated content
    "content",
    "counter-increment",
    "counter-reset",
    "quotes",
    "marker-offset",
    // Text
    "color",
    "direction",
    "font",
    "font-family",
    "font-size",
    "font-size-adjust",
    "font-stretch",
    "font-style",
    "font-variant",
    "font-weight",
    "letter-spacing",
    "text-align",
    "line-height",
    "text-decoration",
    "text-indent",
    "text-shadow",
    "text-transform",
    "unicode-bidi",
    "vertical-align",
    "word-spacing",
    // Speech
    "azimuth",
    "cue",
    "cue-after",
    "cue-before",
    "elevation",
    "pause",
    "pause-after",
    "pause-before",
    "pitch",
    "pitch-range",
    "play-during",
    "richness",
    "speak",
    "speak-header",
    "speak-numeral",
    "speak-punctuation",
    "speech-rate",
    "stress",
    "voice-family",
    "volume",
    // Background
    "background",
    "background-attachment",
    "background-color",
    "background-image",
    "background-position",
    "background-repeat",
];
