//! Fix command - swap misordered logger arguments.
//!
//! Detected violations are fixed by swapping the first two arguments,
//! preserving each argument's original source text. After an `--apply`
//! pass the rewritten files are re-checked; the swap is constructed so
//! that a fixed call never reports again, so one pass converges.
//!
//! Use `--apply` to actually rewrite files (default is dry-run mode).

use anyhow::Result;

use super::super::{actions::SwapArgs, args::FixCommand};
use super::{CommandResult, CommandSummary, FixSummary};
use crate::{
    core::CheckContext,
    issues::{ArgsPositionIssue, Issue},
    rules::args_order::check_args_position_issues,
};

pub fn fix(cmd: FixCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let apply = args.apply;

    let ctx = CheckContext::new(&args.common)?;
    let mut issues: Vec<ArgsPositionIssue> = check_args_position_issues(&ctx);
    issues.sort_by(|a, b| {
        a.context
            .file_path()
            .cmp(b.context.file_path())
            .then_with(|| a.context.line().cmp(&b.context.line()))
            .then_with(|| a.context.col().cmp(&b.context.col()))
    });

    let source_files_checked = ctx.files.len();
    let parse_error_count = ctx.parsed_files_errors().len();
    let parse_errors: Vec<Issue> = ctx
        .parsed_files_errors()
        .iter()
        .cloned()
        .map(Issue::ParseError)
        .collect();

    let summary = if apply {
        let stats = SwapArgs::run(&issues)?;

        // Re-run the check on the rewritten sources.
        let ctx = CheckContext::new(&args.common)?;
        let remaining_count = check_args_position_issues(&ctx).len();

        FixSummary {
            is_apply: true,
            issues,
            applied_count: stats.changes_applied,
            file_count: stats.files_modified,
            remaining_count,
        }
    } else {
        FixSummary {
            is_apply: false,
            issues,
            applied_count: 0,
            file_count: 0,
            remaining_count: 0,
        }
    };

    // In dry-run mode, finding fixable issues is a failure (exit 1) to
    // signal there is work to be done; after --apply only leftovers count.
    let error_count = if summary.is_apply {
        summary.remaining_count
    } else {
        summary.issues.len()
    };

    Ok(CommandResult {
        summary: CommandSummary::Fix(summary),
        issues: parse_errors,
        error_count,
        parse_error_count,
        source_files_checked,
        exit_on_errors: true,
    })
}
