//! Argument order detection for pino logger calls.
//!
//! Pino expects the metadata object before the message string:
//! `logger.info({userId: 123}, 'User logged in')`. This rule flags calls
//! written the other way around and produces a fix that swaps the first
//! two arguments.
//!
//! Only the first two arguments participate. A call like
//! `logger.warn('Msg', err, extra)` becomes `logger.warn(err, 'Msg', extra)`;
//! arguments past index 1 keep their order and position.

use crate::core::CheckContext;
use crate::core::data::ArgSwap;
use crate::core::extract::{ArgKind, CallArg, LoggerCall};
use crate::issues::ArgsPositionIssue;

/// Check every extracted logger call in the project.
pub fn check_args_position_issues(ctx: &CheckContext) -> Vec<ArgsPositionIssue> {
    ctx.logger_calls()
        .values()
        .flatten()
        .filter_map(check_call)
        .collect()
}

/// Decide whether a single logger call is misordered.
///
/// A call is flagged iff:
/// - it has at least two arguments,
/// - the first argument is message-like (string or template literal),
/// - the second argument is not message-like,
/// - the second argument is not `null`/`undefined` (an explicit
///   absence-of-data marker is a valid second argument),
/// - the first argument carries no printf-style interpolation markers
///   (`logger.info('Hello %s', name)` is deliberate positional formatting).
pub fn check_call(call: &LoggerCall) -> Option<ArgsPositionIssue> {
    let [first, second, ..] = call.args.as_slice() else {
        return None;
    };

    if first.kind != ArgKind::MessageLike {
        return None;
    }
    if second.kind == ArgKind::MessageLike {
        return None;
    }
    if second.nullish {
        return None;
    }
    if first.interpolated {
        return None;
    }

    Some(ArgsPositionIssue {
        context: call.context.clone(),
        method: call.method,
        correct_usage: correct_usage(&call.args),
        fix: ArgSwap::new(first.slice.clone(), second.slice.clone()),
    })
}

/// Build the "correct usage" sketch shown in the diagnostic.
///
/// `{...}, "message"` when the second argument is an object literal,
/// `data, "message"` for any other value; `, ...` is appended when the
/// call has more than two arguments.
fn correct_usage(args: &[CallArg]) -> String {
    let base = match args[1].kind {
        ArgKind::StructuredData => "{...}, \"message\"",
        ArgKind::MessageLike | ArgKind::Other => "data, \"message\"",
    };

    if args.len() > 2 {
        format!("{}, ...", base)
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::data::apply_edits;
    use crate::core::extract::{LoggerMethod, extract_logger_calls};
    use crate::core::parsers::js::parse_source;

    fn extract(code: &str) -> Vec<LoggerCall> {
        let source_map = Arc::new(swc_common::SourceMap::default());
        let parsed = parse_source(code.to_string(), "./test.ts", source_map).unwrap();
        extract_logger_calls(&parsed, "./test.ts")
    }

    fn check(code: &str) -> Option<ArgsPositionIssue> {
        let calls = extract(code);
        assert_eq!(calls.len(), 1, "expected exactly one logger call: {code}");
        check_call(&calls[0])
    }

    fn fixed(code: &str) -> String {
        let issue = check(code).expect("expected a violation");
        apply_edits(code, &issue.fix.edits())
    }

    // ============================================================
    // Flagged calls
    // ============================================================

    #[test]
    fn test_string_before_object() {
        let issue = check("logger.info('User logged in', {userId: 123})").unwrap();
        assert_eq!(issue.method, LoggerMethod::Info);
        assert_eq!(issue.correct_usage, "{...}, \"message\"");
    }

    #[test]
    fn test_string_before_identifier() {
        let issue = check("logger.error('Error', error)").unwrap();
        assert_eq!(issue.correct_usage, "data, \"message\"");
    }

    #[test]
    fn test_template_before_object() {
        let issue = check("logger.debug(`Processing ${id}`, {data: result})").unwrap();
        assert_eq!(issue.method, LoggerMethod::Debug);
    }

    #[test]
    fn test_extra_args_appended_to_usage() {
        let issue = check("logger.warn('Msg', err, extra)").unwrap();
        assert_eq!(issue.correct_usage, "data, \"message\", ...");
    }

    #[test]
    fn test_extra_args_with_object_second() {
        let issue = check("logger.warn('Warning message', {level: 'high'}, someVar)").unwrap();
        assert_eq!(issue.correct_usage, "{...}, \"message\", ...");
    }

    #[test]
    fn test_all_methods_flagged() {
        for method in ["trace", "debug", "info", "warn", "error", "fatal", "child", "log"] {
            let code = format!("logger.{}('msg', {{a: 1}})", method);
            assert!(check(&code).is_some(), "{} should be flagged", method);
        }
    }

    // ============================================================
    // Fix output
    // ============================================================

    #[test]
    fn test_fix_swaps_object_and_message() {
        assert_eq!(
            fixed("logger.info('User logged in', {userId: 123})"),
            "logger.info({userId: 123}, 'User logged in')"
        );
    }

    #[test]
    fn test_fix_swaps_identifier_and_message() {
        assert_eq!(fixed("logger.error('Error', error)"), "logger.error(error, 'Error')");
    }

    #[test]
    fn test_fix_swaps_only_first_two() {
        assert_eq!(
            fixed("logger.warn('Msg', err, extra)"),
            "logger.warn(err, 'Msg', extra)"
        );
    }

    #[test]
    fn test_fix_preserves_formatting() {
        assert_eq!(
            fixed("logger.info(\"double quoted\", { nested: { deep: true } })"),
            "logger.info({ nested: { deep: true } }, \"double quoted\")"
        );
    }

    #[test]
    fn test_fix_is_idempotent() {
        let code = "logger.info('User logged in', {userId: 123})";
        let once = fixed(code);

        let calls = extract(&once);
        assert_eq!(calls.len(), 1);
        assert!(check_call(&calls[0]).is_none(), "fixed call was flagged again");
    }

    #[test]
    fn test_fix_multiline_call() {
        let code = "logger.info(\n  'User logged in',\n  {userId: 123}\n)";
        assert_eq!(fixed(code), "logger.info(\n  {userId: 123},\n  'User logged in'\n)");
    }

    // ============================================================
    // Calls that must not be flagged
    // ============================================================

    #[test]
    fn test_correct_order_not_flagged() {
        assert!(check("logger.info({userId: 123}, 'User logged in')").is_none());
    }

    #[test]
    fn test_single_argument_not_flagged() {
        assert!(check("logger.info('Simple message')").is_none());
        assert!(check("logger.info({data: 'test'})").is_none());
    }

    #[test]
    fn test_zero_arguments_not_flagged() {
        assert!(check("logger.info()").is_none());
    }

    #[test]
    fn test_two_strings_not_flagged() {
        assert!(check("logger.info('first', 'second')").is_none());
    }

    #[test]
    fn test_interpolation_markers_not_flagged() {
        assert!(check("logger.info('Hello %s', name)").is_none());
        assert!(check("logger.info('%d items', count)").is_none());
        assert!(check("logger.info('100%% done', stats)").is_none());
    }

    #[test]
    fn test_nullish_second_not_flagged() {
        assert!(check("logger.info('msg', null)").is_none());
        assert!(check("logger.info('msg', undefined)").is_none());
    }

    #[test]
    fn test_object_first_not_flagged() {
        assert!(check("logger.info({a: 1}, {b: 2})").is_none());
    }

    #[test]
    fn test_other_first_not_flagged() {
        assert!(check("logger.info(count, 'message')").is_none());
    }

    #[test]
    fn test_interpolated_template_still_flagged() {
        // Markers only suppress plain strings; a template literal with a
        // "%s" in its text is not positional formatting.
        assert!(check("logger.info(`Hello %s`, name)").is_some());
    }

    #[test]
    fn test_numeric_second_flagged() {
        let issue = check("logger.info('count', 42)").unwrap();
        assert_eq!(issue.correct_usage, "data, \"message\"");
    }
}
