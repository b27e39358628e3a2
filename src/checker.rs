// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! The line checker and checking driver
//!
//! The driver splits a source into lines and walks them strictly in
//! order, threading a `CheckState` through the run. For each line the
//! tracked state is advanced first, then the rules run in their
//! declared sequence, rewriting the line in place when fixing is
//! enabled. The checker is total: malformed input degrades to more
//! violations, never to an error.

use crate::patterns;
use crate::props::PropertyOrderBuffer;
use crate::report::Report;
use crate::rules::{self, LineRule, PropertyOrderTable, Violation, RULE_SEQUENCE};
use crate::state::{self, CheckState, LineScan};

/// Options recognized by the checker.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    /// Apply auto-fixers and rewrite offending lines.
    pub fix: bool,
    /// Reserved for verbose diagnostics.
    pub debug: bool,
}

/// Per-line working data handed to the rules. Created per line,
/// consumed immediately.
struct LineContext {
    /// Zero-based line index.
    index: usize,
    /// The line as it currently reads; fixers rewrite it in place and
    /// the final text is written back into the reassembled source.
    current: String,
    /// The tracker's view of the line.
    scan: LineScan,
}

/// Checks one source text, line by line, against the convention rules.
/// Each source gets its own checker: state never crosses runs.
pub struct Checker<'a> {
    options: CheckOptions,
    table: &'a PropertyOrderTable,
    rules: &'a [LineRule],
    max_depth: i32,
    max_line_length: usize,
}

impl<'a> Checker<'a> {
    /// A checker with the default rule sequence and limits.
    pub fn new(options: CheckOptions, table: &'a PropertyOrderTable) -> Self {
        Checker {
            options,
            table,
            rules: RULE_SEQUENCE,
            max_depth: rules::MAX_NEST_DEPTH,
            max_line_length: rules::MAX_LINE_LENGTH,
        }
    }

    /// Run a different rule sequence.
    pub fn with_rules(mut self, rules: &'a [LineRule]) -> Self {
        self.rules = rules;
        self
    }

    /// Override the nesting depth limit.
    pub fn with_max_depth(mut self, max_depth: i32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Override the line length limit.
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// Check `source` and return the report.
    ///
    /// Lines are split on `\n` with stray carriage returns removed, and
    /// rejoined with `\n` regardless of the original line-ending style.
    /// The fixed source always has the same number of lines as the
    /// input.
    pub fn run(&self, source: &str) -> Report {
        let mut lines: Vec<String> = source
            .split('\n')
            .map(|line| line.replace('\r', ""))
            .collect();

        let mut report = Report::default();
        report.summary.line_count = lines.len();

        let mut state = CheckState::default();
        let mut buffer = PropertyOrderBuffer::new();

        for index in 0..lines.len() {
            let (next, scan) = state::update(state, &lines[index]);
            state = next;

            let mut ctx = LineContext {
                index,
                current: lines[index].clone(),
                scan,
            };

            for violation in std::mem::take(&mut ctx.scan.violations) {
                self.add_line_violation(&mut ctx, &mut report, violation);
            }
            for rule in self.rules {
                self.run_rule(*rule, &mut ctx, &mut report, &mut buffer, state);
            }

            lines[index] = ctx.current;
        }

        report.fixed_source = lines.join("\n");
        report
    }

    fn run_rule(
        &self,
        rule: LineRule,
        ctx: &mut LineContext,
        report: &mut Report,
        buffer: &mut PropertyOrderBuffer,
        state: CheckState,
    ) {
        match rule {
            LineRule::DocumentComment => self.check_document_comment(ctx, report),
            LineRule::NestDepth => self.check_nest_depth(ctx, report, state),
            LineRule::Colons => self.check_colons(ctx, report),
            LineRule::Tabs => self.check_tabs(ctx, report),
            LineRule::MultilineComments => self.check_multiline_comments(ctx, report),
            LineRule::PropertyOrder => self.check_property_order(ctx, report, buffer),
        }
    }

    /// The file must open with a multiline comment explaining its
    /// purpose. Missing entirely is not fixable; present but not
    /// leading is.
    fn check_document_comment(&self, ctx: &mut LineContext, report: &mut Report) {
        if ctx.index != 0 {
            return;
        }
        if !ctx.current.contains("/*") {
            self.add_line_violation(ctx, report, Violation::NoDocumentComment);
        } else if !ctx.current.starts_with("/*") {
            self.add_line_violation(ctx, report, Violation::DocumentCommentNotFirst);
        }
    }

    /// The nesting depth after this line must stay within the limit.
    fn check_nest_depth(&self, ctx: &mut LineContext, report: &mut Report, state: CheckState) {
        if ctx.scan.inside_after {
            return;
        }
        if state.nest_depth > self.max_depth {
            self.add_line_violation(ctx, report, Violation::TooDeeplyNested);
        }
    }

    /// No whitespace before a colon; one space after it, except when
    /// the value opens a nested block.
    fn check_colons(&self, ctx: &mut LineContext, report: &mut Report) {
        if ctx.scan.inside_after {
            return;
        }
        if patterns::has_space_before_colon(&ctx.current) {
            self.add_line_violation(ctx, report, Violation::SpaceBeforeColon);
        }
        if patterns::has_colon_without_space(&ctx.current) {
            self.add_line_violation(ctx, report, Violation::ColonNotFollowedBySpace);
        }
    }

    /// No literal tabs, comments included. One violation per line.
    fn check_tabs(&self, ctx: &mut LineContext, report: &mut Report) {
        if ctx.current.contains('\t') {
            self.add_line_violation(ctx, report, Violation::TabsUsed);
        }
    }

    /// Multiline comment formatting. Interior and closing lines of a
    /// comment are exempt; the opening line is checked as ordinary
    /// text.
    fn check_multiline_comments(&self, ctx: &mut LineContext, report: &mut Report) {
        if ctx.scan.inside_before {
            return;
        }
        if ctx.current.chars().count() > self.max_line_length {
            let max = self.max_line_length;
            self.add_line_violation(ctx, report, Violation::LineTooLong { max });
        }
        if patterns::comment_appended_after_code(&ctx.current) {
            self.add_line_violation(ctx, report, Violation::CommentAfterCode);
        }
    }

    /// Feed and flush the property-order buffer at block boundaries.
    /// An opening brace flushes before the line is considered as a
    /// candidate, a closing brace after, so single-line blocks validate
    /// their own contents.
    fn check_property_order(
        &self,
        ctx: &mut LineContext,
        report: &mut Report,
        buffer: &mut PropertyOrderBuffer,
    ) {
        if ctx.scan.cleaned.contains('{') && !buffer.is_empty() {
            self.flush_buffer(ctx.index, report, buffer);
        }
        buffer.add(&ctx.current, &ctx.scan.cleaned, ctx.index);
        if ctx.scan.cleaned.contains('}') && !buffer.is_empty() {
            self.flush_buffer(ctx.index, report, buffer);
        }
    }

    fn flush_buffer(
        &self,
        line_end: usize,
        report: &mut Report,
        buffer: &mut PropertyOrderBuffer,
    ) {
        let result = buffer.flush(self.table, line_end);
        for violation in result.violations {
            let message = format!(
                "{} between line {} and {}.",
                violation.message(),
                result.line_start + 1,
                result.line_end + 1
            );
            report
                .errors_by_line
                .entry(result.line_end)
                .or_default()
                .push(message);
            report.summary.error_count += 1;
        }
    }

    /// Record a violation on the context's line, applying its fixer
    /// when fixing is enabled. Fixed messages carry a "(FIXED)" marker.
    fn add_line_violation(&self, ctx: &mut LineContext, report: &mut Report, violation: Violation) {
        let mut fixed = "";
        if self.options.fix {
            if let Some(fixer) = violation.fixer() {
                ctx.current = fixer(&ctx.current);
                report.summary.fixed_count += 1;
                fixed = " (FIXED)";
            }
        }
        let message = format!("{} on line {}{}.", violation.message(), ctx.index + 1, fixed);
        report
            .errors_by_line
            .entry(ctx.index)
            .or_default()
            .push(message);
        report.summary.error_count += 1;
    }
}
