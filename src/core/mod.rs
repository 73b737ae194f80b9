//! Core analysis engine.
//!
//! The pipeline per file: parse (`parsers`), collect suppression comments
//! (`collect`), extract logger calls (`extract`). `CheckContext` owns the
//! file set and runs the stages lazily and in parallel.

pub mod collect;
pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod parsers;

pub use context::CheckContext;
pub use data::{ArgSlice, ArgSwap, SourceContext, SourceLocation, TextEdit, TextRange, apply_edits};
