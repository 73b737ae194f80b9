use std::{
    cell::OnceCell,
    collections::{HashMap, HashSet},
    path::PathBuf,
};

use anyhow::{Context as _, Result, anyhow};
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        extract::{LoggerCall, extract_logger_calls},
        file_scanner::scan_files,
        parsers::js::{ParsedSource, parse_source},
    },
    issues::ParseErrorIssue,
};

/// Core analysis context.
///
/// Owns configuration and the scanned file set, and lazily runs the
/// per-file pipeline (parse, then extract logger calls) on first access.
/// Parsing and extraction are parallelized per file with rayon; each file
/// gets its own `SourceMap` so the stages are thread safe.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--source-root`)
/// 2. `.pinolintrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    /// All source files to analyze (JS/JSX/TS/TSX/MJS/CJS).
    pub files: HashSet<String>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    /// Parsed AST for each source file.
    /// Initialized on first call to `parsed_files()`.
    parsed_files: OnceCell<HashMap<String, ParsedSource>>,

    /// Parse errors encountered while parsing source files.
    /// Populated alongside `parsed_files` initialization.
    parsed_files_errors: OnceCell<Vec<ParseErrorIssue>>,

    /// Extracted logger calls per file.
    /// Initialized on first call to `logger_calls()`.
    logger_calls: OnceCell<HashMap<String, Vec<LoggerCall>>>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// Loads configuration (CLI args > config file > defaults) and scans
    /// the source tree. Parsing happens lazily on first access.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let source_root = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let root_dir = source_root.clone();
        let path = source_root
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", source_root))?;

        let config_result = load_config(&source_root)?;

        if verbose && !config_result.from_file {
            eprintln!("Note: No {} found, using default configuration", crate::config::CONFIG_FILE_NAME);
        }

        let config = config_result.config;

        // Configured include dirs that don't exist fall back to scanning
        // the whole root, so a plain Node project without src/ still works.
        let includes: Vec<String> = config
            .includes
            .iter()
            .filter(|inc| {
                inc.contains('*') || inc.contains('?') || source_root.join(inc).exists()
            })
            .cloned()
            .collect();

        let scan_result = scan_files(
            path,
            &includes,
            &config.ignores,
            config.ignore_test_files,
            verbose,
        );

        if scan_result.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            verbose,
            parsed_files: OnceCell::new(),
            parsed_files_errors: OnceCell::new(),
            logger_calls: OnceCell::new(),
        })
    }

    /// Get parsed AST for all source files (lazy initialization).
    ///
    /// Parses all files using swc. Parse errors are collected separately
    /// and can be retrieved via `parsed_files_errors()`.
    ///
    /// File reading (I/O-bound) and parsing (CPU-bound) are both
    /// parallelized; each file gets its own `Arc<SourceMap>` and per-thread
    /// swc globals.
    pub fn parsed_files(&self) -> &HashMap<String, ParsedSource> {
        self.parsed_files.get_or_init(|| {
            use std::sync::Arc;

            let parse_results: Vec<_> = self
                .files
                .par_iter()
                .map(|file_path| {
                    let parse_result = std::fs::read_to_string(file_path)
                        .map_err(|e| anyhow!("Failed to read file: {}", e))
                        .and_then(|code| {
                            let source_map = Arc::new(swc_common::SourceMap::default());
                            parse_source(code, file_path, source_map)
                        });

                    (file_path.clone(), parse_result)
                })
                .collect();

            // Sequential error collection and HashMap construction
            let mut parsed = HashMap::new();
            let mut errors = Vec::new();

            for (file_path, result) in parse_results {
                match result {
                    Ok(p) => {
                        parsed.insert(file_path, p);
                    }
                    Err(e) => {
                        if self.verbose {
                            eprintln!("Warning: {} - {}", file_path, e);
                        }
                        errors.push(ParseErrorIssue {
                            file_path,
                            error: e.to_string(),
                        });
                    }
                }
            }

            let _ = self.parsed_files_errors.set(errors);
            parsed
        })
    }

    /// Get parse errors from source files.
    ///
    /// Populated when `parsed_files()` is first called.
    pub fn parsed_files_errors(&self) -> &Vec<ParseErrorIssue> {
        self.parsed_files();
        self.parsed_files_errors.get_or_init(Vec::new)
    }

    /// Get extracted logger calls for all files (lazy initialization).
    ///
    /// Triggers parsing if not already done. Suppression comments are
    /// applied during extraction, so suppressed call sites never appear
    /// here.
    pub fn logger_calls(&self) -> &HashMap<String, Vec<LoggerCall>> {
        self.logger_calls.get_or_init(|| {
            let parsed_files = self.parsed_files();

            let results: Vec<_> = parsed_files
                .par_iter()
                .map(|(file_path, parsed)| {
                    let calls = extract_logger_calls(parsed, file_path);
                    (file_path.clone(), calls)
                })
                .collect();

            results.into_iter().collect()
        })
    }
}
