use crate::issues::{ArgsPositionIssue, Issue};

/// Outcome of one CLI command, handed to the reporter and the exit-code
/// mapping.
pub struct CommandResult {
    pub summary: CommandSummary,
    pub issues: Vec<Issue>,
    pub error_count: usize,
    pub parse_error_count: usize,
    pub source_files_checked: usize,
    pub exit_on_errors: bool,
}

pub enum CommandSummary {
    Check,
    Fix(FixSummary),
    Init(InitSummary),
}

pub struct FixSummary {
    pub is_apply: bool,
    /// Violations detected before fixing.
    pub issues: Vec<ArgsPositionIssue>,
    /// Swaps written to disk (0 in dry-run mode).
    pub applied_count: usize,
    /// Files rewritten (0 in dry-run mode).
    pub file_count: usize,
    /// Violations still present after the apply pass re-check.
    pub remaining_count: usize,
}

pub struct InitSummary {
    pub created: bool,
}
