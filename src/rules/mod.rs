//! Rule implementations for pinolint.
//!
//! This module contains pure functions that check extracted logger calls
//! for issues. Each function takes only the specific inputs it needs and
//! returns a specific issue type.
//!
//! ## Module Structure
//!
//! - `helpers`: Name heuristics and string predicates (the recognition table)
//! - `args_order`: Message-before-object argument order detection and fix

pub mod args_order;
pub mod helpers;
