use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::issues::{ArgsPositionIssue, Report};

// ============================================================
// Config Types (get_config)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub ignores: Vec<String>,
    pub includes: Vec<String>,
    pub ignore_test_files: bool,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            ignores: c.ignores,
            includes: c.includes,
            ignore_test_files: c.ignore_test_files,
        }
    }
}

// ============================================================
// Scan Types (scan_args_position)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanArgsPositionParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Maximum number of items to return (default 50, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip (default 0)
    pub offset: Option<u32>,
}

/// Result of scan_args_position operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArgsPositionScanResult {
    pub total_count: usize,
    pub total_file_count: usize,
    pub items: Vec<ArgsPositionItem>,
    pub pagination: Pagination,
}

/// A single misordered logger call
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArgsPositionItem {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
    /// The logger method that was called (info, warn, ...)
    pub method: String,
    /// Full diagnostic message
    pub message: String,
    /// Sketch of the corrected argument list
    pub correct_usage: String,
    pub source_line: String,
    /// Source text of the misplaced message argument
    pub first_arg: String,
    /// Source text of the argument that should come first
    pub second_arg: String,
}

impl ArgsPositionItem {
    pub fn from_issue(issue: &ArgsPositionIssue) -> Self {
        Self {
            file_path: issue.context.file_path().to_string(),
            line: issue.context.line(),
            col: issue.context.col(),
            method: issue.method.to_string(),
            message: issue.message(),
            correct_usage: issue.correct_usage.clone(),
            source_line: issue.context.source_line.clone(),
            first_arg: issue.fix.first.text.clone(),
            second_arg: issue.fix.second.text.clone(),
        }
    }
}

// ============================================================
// Fix Types (fix_args_position)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FixArgsPositionParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Actually rewrite files; false (default) previews the swaps
    pub apply: Option<bool>,
}

/// Result of fix_args_position operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FixArgsPositionResult {
    /// True when the pass was applied to disk
    pub applied: bool,
    /// Violations detected before fixing
    pub total_count: usize,
    /// Swaps written to disk (0 in preview mode)
    pub applied_count: usize,
    /// Files rewritten (0 in preview mode)
    pub files_modified: usize,
    /// Violations still present after the apply pass
    pub remaining_count: usize,
    /// The affected call sites
    pub items: Vec<ArgsPositionItem>,
}

// ============================================================
// Common Types
// ============================================================

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
