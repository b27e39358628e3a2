// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Check Less stylesheets against the code convention
//!
//! Walks the given files or directories, checks every stylesheet line
//! by line, and reports convention violations. With --fix, fixable
//! violations are repaired in place after a `.bak` backup of the
//! original is written.
//!
//! Usage:
//!   lesslint-check styles/                  # Check a directory tree
//!   lesslint-check -f styles/app.less       # Fix a single file
//!   lesslint-check --json report.json src   # Export a JSON inventory
//!
//! Binary: lesslint-check
//!
//! Logs to: analyses/lesslint-check.log

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use lesslint::checker::{CheckOptions, Checker};
use lesslint::files::{backup_and_write, find_stylesheet_files};
use lesslint::report::{FileReport, Report, RunInventory, Summary};
use lesslint::rules::{self, PropertyOrderTable};
use rayon::prelude::*;

thread_local! {
    static LOG_FILE_PATH: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

fn init_logging() -> PathBuf {
    let analyses_dir = PathBuf::from("analyses");
    let _ = fs::create_dir_all(&analyses_dir);
    let log_path = analyses_dir.join("lesslint-check.log");
    let _ = fs::write(&log_path, "");
    LOG_FILE_PATH.with(|p| {
        *p.borrow_mut() = Some(log_path.clone());
    });
    log_path
}

macro_rules! log {
    () => {{
        use std::io::Write;
        println!();
        LOG_FILE_PATH.with(|p| {
            if let Some(ref log_path) = *p.borrow() {
                if let Ok(mut file) = std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(log_path)
                {
                    let _ = writeln!(file);
                }
            }
        });
    }};
    ($($arg:tt)*) => {{
        use std::io::Write;
        let msg = format!($($arg)*);
        println!("{}", msg);
        LOG_FILE_PATH.with(|p| {
            if let Some(ref log_path) = *p.borrow() {
                if let Ok(mut file) = std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(log_path)
                {
                    let _ = writeln!(file, "{}", msg);
                }
            }
        });
    }};
}

#[derive(Parser)]
#[command(name = "lesslint-check")]
#[command(about = "Check Less stylesheets for convention violations, optionally fixing them")]
struct Args {
    /// Files or directories to check. Directories are searched
    /// recursively for .less and .css files.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Apply auto-fixers and rewrite offending files (a .bak backup is
    /// written first)
    #[arg(short, long)]
    fix: bool,

    /// Verbose diagnostics (per-file timing)
    #[arg(long)]
    debug: bool,

    /// Write a JSON inventory of the run to this file
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Maximum allowed nesting depth
    #[arg(long, default_value_t = rules::MAX_NEST_DEPTH)]
    max_depth: i32,

    /// Maximum allowed line length
    #[arg(long, default_value_t = rules::MAX_LINE_LENGTH)]
    max_line_length: usize,
}

struct CheckedFile {
    report: Report,
    fixed: bool,
}

struct FileOutcome {
    path: PathBuf,
    result: Result<CheckedFile>,
    elapsed: Duration,
}

fn check_file(
    path: &Path,
    options: CheckOptions,
    table: &PropertyOrderTable,
    max_depth: i32,
    max_line_length: usize,
) -> FileOutcome {
    let start = Instant::now();
    let result = (|| -> Result<CheckedFile> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let checker = Checker::new(options, table)
            .with_max_depth(max_depth)
            .with_max_line_length(max_line_length);
        let report = checker.run(&source);

        // Mandatory backup-then-overwrite whenever any fix was applied.
        let mut fixed = false;
        if options.fix && report.fixed_source != source {
            backup_and_write(path, &source, &report.fixed_source)?;
            fixed = true;
        }
        Ok(CheckedFile { report, fixed })
    })();
    FileOutcome {
        path: path.to_path_buf(),
        result,
        elapsed: start.elapsed(),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_path = init_logging();

    let files = find_stylesheet_files(&args.paths);
    if files.is_empty() {
        eprintln!("No stylesheet files found under the given paths");
        return Ok(());
    }

    if args.debug {
        log!("Checking {} files, log: {}", files.len(), log_path.display());
        log!();
    }

    let table = rules::default_property_order();
    let options = CheckOptions {
        fix: args.fix,
        debug: args.debug,
    };

    // Each file gets an independent checker; results are printed in
    // discovery order after the parallel pass.
    let outcomes: Vec<FileOutcome> = files
        .par_iter()
        .map(|path| check_file(path, options, &table, args.max_depth, args.max_line_length))
        .collect();

    let mut totals = Summary::default();
    let mut file_count = 0_usize;
    let mut failed_count = 0_usize;
    let mut file_reports: Vec<FileReport> = Vec::new();

    for outcome in &outcomes {
        log!("Checking {}", outcome.path.display());
        match &outcome.result {
            Ok(checked) => {
                let summary = checked.report.summary;
                if summary.error_count > 0 {
                    log!("  {} errors found.", summary.error_count);
                    log!("  {} errors fixed.", summary.fixed_count);
                } else {
                    log!("  OK");
                }
                for message in checked.report.ordered_messages() {
                    log!("    {}", message);
                }
                if args.debug {
                    log!("  ({} lines in {:?})", summary.line_count, outcome.elapsed);
                }

                totals.line_count += summary.line_count;
                totals.error_count += summary.error_count;
                totals.fixed_count += summary.fixed_count;
                file_count += 1;
                file_reports.push(FileReport {
                    path: outcome.path.display().to_string(),
                    summary,
                    messages: checked
                        .report
                        .ordered_messages()
                        .into_iter()
                        .map(String::from)
                        .collect(),
                    fixed: checked.fixed,
                });
            }
            Err(err) => {
                log!("  ERROR: {:#}", err);
                failed_count += 1;
            }
        }
        log!();
    }

    log!("Summary");
    log!("-------");
    log!("Files checked: {}", file_count);
    if failed_count > 0 {
        log!("Files failed:  {}", failed_count);
    }
    log!("Errors found:  {}", totals.error_count);
    log!("Errors fixed:  {}", totals.fixed_count);

    if let Some(json_path) = &args.json {
        let inventory = RunInventory {
            generated: Local::now().format("%Y-%m-%d %H:%M:%S %Z").to_string(),
            files: file_reports,
            totals,
        };
        fs::write(json_path, inventory.to_json()?)
            .with_context(|| format!("Failed to write inventory: {}", json_path.display()))?;
        log!();
        log!("Inventory written to {}", json_path.display());
    }

    Ok(())
}
