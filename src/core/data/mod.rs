//! Core data types shared across the analysis pipeline.
//!
//! - `source`: source code location types (SourceContext, SourceLocation)
//! - `fix`: text edit primitives and the argument-swap fix

pub mod fix;
pub mod source;

pub use fix::{ArgSlice, ArgSwap, TextEdit, TextRange, apply_edits};
pub use source::{SourceContext, SourceLocation};
