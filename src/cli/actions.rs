//! SwapArgs action.
//!
//! Converts args-position issues into text edits and applies them to the
//! source files. Edits are grouped per file so each file is read and
//! written exactly once per pass.

use std::collections::BTreeMap;
use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::data::{TextEdit, apply_edits};
use crate::issues::ArgsPositionIssue;

/// Statistics from running an action.
#[derive(Debug, Clone, Default)]
pub struct ActionStats {
    /// Number of issues processed.
    pub processed: usize,
    /// Number of swaps actually applied to files.
    pub changes_applied: usize,
    /// Number of files modified.
    pub files_modified: usize,
}

/// Action that swaps the first two arguments of misordered logger calls.
pub struct SwapArgs;

impl SwapArgs {
    /// Group the edits of all issues by file path.
    fn edits_by_file(issues: &[ArgsPositionIssue]) -> BTreeMap<&str, Vec<TextEdit>> {
        let mut by_file: BTreeMap<&str, Vec<TextEdit>> = BTreeMap::new();
        for issue in issues {
            by_file
                .entry(issue.context.file_path())
                .or_default()
                .extend(issue.fix.edits());
        }
        by_file
    }

    /// Execute the action (modify files).
    pub fn run(issues: &[ArgsPositionIssue]) -> Result<ActionStats> {
        let mut stats = ActionStats {
            processed: issues.len(),
            ..Default::default()
        };

        for (file_path, edits) in Self::edits_by_file(issues) {
            let source = fs::read_to_string(file_path)
                .with_context(|| format!("Failed to read file: {}", file_path))?;
            let fixed = apply_edits(&source, &edits);

            if fixed != source {
                fs::write(file_path, &fixed)
                    .with_context(|| format!("Failed to write file: {}", file_path))?;
                // Two edits per swap.
                stats.changes_applied += edits.len() / 2;
                stats.files_modified += 1;
            }
        }

        Ok(stats)
    }

    /// Preview the action (dry-run mode).
    pub fn preview(issues: &[ArgsPositionIssue]) {
        for issue in issues {
            println!(
                "  {} {}:{}:{}",
                "-->".blue(),
                issue.context.file_path(),
                issue.context.line(),
                issue.context.col()
            );
            println!(
                "      would swap {} with {}",
                format!("`{}`", issue.fix.first.text).cyan(),
                format!("`{}`", issue.fix.second.text).cyan()
            );
        }
    }
}
