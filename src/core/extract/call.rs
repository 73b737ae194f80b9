//! Extracted logger call data.
//!
//! These types are the handoff point between extraction (AST traversal)
//! and the argument-order rule. A `LoggerCall` carries everything the rule
//! needs: the method, and for each argument its classification and source
//! slice. The AST itself does not cross this boundary.

use std::fmt;

use crate::core::data::{ArgSlice, SourceContext};

/// A recognized pino logger method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggerMethod {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Child,
    Log,
}

impl LoggerMethod {
    /// Parse a method name from a property identifier.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            "error" => Some(Self::Error),
            "fatal" => Some(Self::Fatal),
            "child" => Some(Self::Child),
            "log" => Some(Self::Log),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Child => "child",
            Self::Log => "log",
        }
    }
}

impl fmt::Display for LoggerMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Syntactic classification of a single call argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// An object literal: `{userId: 123}`.
    StructuredData,
    /// A string literal or template literal: `'msg'`, `` `msg ${x}` ``.
    MessageLike,
    /// Anything else: identifiers, calls, numbers, spreads, ...
    Other,
}

/// One argument of a logger call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallArg {
    pub kind: ArgKind,
    /// Byte range and original text of the argument (spread dots included).
    pub slice: ArgSlice,
    /// `null` literal or the `undefined` identifier.
    pub nullish: bool,
    /// Plain string literal containing printf-style markers (`%s`, ...).
    pub interpolated: bool,
}

/// A call on something that heuristically looks like a pino logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerCall {
    pub context: SourceContext,
    pub method: LoggerMethod,
    pub args: Vec<CallArg>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_methods() {
        assert_eq!(LoggerMethod::parse("trace"), Some(LoggerMethod::Trace));
        assert_eq!(LoggerMethod::parse("debug"), Some(LoggerMethod::Debug));
        assert_eq!(LoggerMethod::parse("info"), Some(LoggerMethod::Info));
        assert_eq!(LoggerMethod::parse("warn"), Some(LoggerMethod::Warn));
        assert_eq!(LoggerMethod::parse("error"), Some(LoggerMethod::Error));
        assert_eq!(LoggerMethod::parse("fatal"), Some(LoggerMethod::Fatal));
        assert_eq!(LoggerMethod::parse("child"), Some(LoggerMethod::Child));
        assert_eq!(LoggerMethod::parse("log"), Some(LoggerMethod::Log));
    }

    #[test]
    fn test_parse_unrecognized_methods() {
        assert_eq!(LoggerMethod::parse("warning"), None);
        assert_eq!(LoggerMethod::parse("Info"), None);
        assert_eq!(LoggerMethod::parse(""), None);
    }

    #[test]
    fn test_method_display() {
        assert_eq!(LoggerMethod::Info.to_string(), "info");
        assert_eq!(LoggerMethod::Fatal.to_string(), "fatal");
    }
}
