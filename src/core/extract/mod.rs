//! Logger call extraction from parsed source files.
//!
//! A single AST traversal per file collects every call whose callee looks
//! like a pino logger, together with a classification of each argument.
//! The argument-order rule then decides, per call, whether the arguments
//! are misordered.

pub mod call;
pub mod visitor;

pub use call::{ArgKind, CallArg, LoggerCall, LoggerMethod};
pub use visitor::{LoggerCallCollector, extract_logger_calls};
