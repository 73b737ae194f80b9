//! AST traversal that collects logger calls.
//!
//! The collector visits every call expression in tree order and keeps the
//! ones whose callee passes the logger heuristic. Argument classification
//! happens here too, while the AST is in hand; the rule layer only sees
//! [`LoggerCall`] values.

use swc_common::{Loc, SourceMap, SourceMapper, Span, Spanned};
use swc_ecma_ast::{CallExpr, Callee, Expr, ExprOrSpread, Lit, MemberProp};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::collect::{CommentCollector, Suppressions};
use crate::core::data::{ArgSlice, SourceContext, SourceLocation, TextRange};
use crate::core::extract::{ArgKind, CallArg, LoggerCall, LoggerMethod};
use crate::core::parsers::js::ParsedSource;
use crate::rules::helpers::{
    has_interpolation_markers, is_logger_object_name, is_logger_property_name,
};

/// Extract all logger calls from a parsed file, honoring suppression
/// comments.
pub fn extract_logger_calls(parsed: &ParsedSource, file_path: &str) -> Vec<LoggerCall> {
    let suppressions = CommentCollector::collect(&parsed.comments, &parsed.source_map);
    let mut collector = LoggerCallCollector::new(file_path, &parsed.source_map, suppressions);
    parsed.module.visit_with(&mut collector);
    collector.into_calls()
}

pub struct LoggerCallCollector<'a> {
    file_path: &'a str,
    source_map: &'a SourceMap,
    suppressions: Suppressions,
    calls: Vec<LoggerCall>,
}

impl<'a> LoggerCallCollector<'a> {
    pub fn new(file_path: &'a str, source_map: &'a SourceMap, suppressions: Suppressions) -> Self {
        Self {
            file_path,
            source_map,
            suppressions,
            calls: Vec::new(),
        }
    }

    pub fn into_calls(self) -> Vec<LoggerCall> {
        self.calls
    }

    /// Decide whether a call expression is a logger call.
    ///
    /// The callee must be `object.method(...)` where `method` is a pino
    /// level and `object` satisfies the name heuristic. Any other shape
    /// (bare calls, computed properties, deeper chains with non-logger
    /// properties) is not a logger call.
    fn classify_callee(node: &CallExpr) -> Option<LoggerMethod> {
        let Callee::Expr(callee) = &node.callee else {
            return None;
        };
        let Expr::Member(member) = &**callee else {
            return None;
        };
        let MemberProp::Ident(prop) = &member.prop else {
            return None;
        };
        let method = LoggerMethod::parse(prop.sym.as_str())?;

        let receiver_ok = match &*member.obj {
            Expr::Ident(ident) => is_logger_object_name(ident.sym.as_str()),
            // Nested access like `this.logger.info(...)` or `req.log.warn(...)`:
            // accept only when the inner property names a logger.
            Expr::Member(inner) => match &inner.prop {
                MemberProp::Ident(inner_prop) => is_logger_property_name(inner_prop.sym.as_str()),
                _ => false,
            },
            _ => false,
        };

        receiver_ok.then_some(method)
    }

    fn classify_arg(&self, arg: &ExprOrSpread) -> CallArg {
        let expr = &*arg.expr;

        // A spread argument is opaque: it may expand to anything, so it is
        // never treated as the message or the metadata object.
        let kind = if arg.spread.is_some() {
            ArgKind::Other
        } else {
            match expr {
                Expr::Object(_) => ArgKind::StructuredData,
                Expr::Lit(Lit::Str(_)) | Expr::Tpl(_) => ArgKind::MessageLike,
                _ => ArgKind::Other,
            }
        };

        let nullish = matches!(expr, Expr::Lit(Lit::Null(_)))
            || matches!(expr, Expr::Ident(ident) if ident.sym.as_str() == "undefined");

        let interpolated = match expr {
            Expr::Lit(Lit::Str(s)) => s
                .value
                .as_str()
                .is_some_and(has_interpolation_markers),
            _ => false,
        };

        let lo = arg
            .spread
            .map(|spread| spread.lo)
            .unwrap_or_else(|| expr.span().lo);
        let hi = expr.span().hi;

        CallArg {
            kind,
            slice: self.make_slice(Span::new(lo, hi)),
            nullish,
            interpolated,
        }
    }

    /// Byte range (relative to the file start) and original text of a span.
    fn make_slice(&self, span: Span) -> ArgSlice {
        let loc = self.source_map.lookup_char_pos(span.lo);
        let start = (span.lo - loc.file.start_pos).0 as usize;
        let end = (span.hi - loc.file.start_pos).0 as usize;
        let text = self
            .source_map
            .span_to_snippet(span)
            .unwrap_or_default();
        ArgSlice::new(TextRange::new(start, end), text)
    }

    fn make_source_context(&self, loc: &Loc) -> SourceContext {
        let source_line = loc
            .file
            .get_line(loc.line - 1)
            .map(|cow| cow.to_string())
            .unwrap_or_default();

        SourceContext::new(
            SourceLocation::new(self.file_path, loc.line, loc.col_display + 1),
            source_line,
        )
    }
}

impl Visit for LoggerCallCollector<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Some(method) = Self::classify_callee(node) {
            let loc = self.source_map.lookup_char_pos(node.span.lo);
            if !self.suppressions.is_suppressed(loc.line) {
                let args = node.args.iter().map(|arg| self.classify_arg(arg)).collect();
                self.calls.push(LoggerCall {
                    context: self.make_source_context(&loc),
                    method,
                    args,
                });
            }
        }

        // Nested calls (e.g. a logger call inside an argument) are still
        // visited.
        node.visit_children_with(self);
    }
}
